use crate::error::{Error, Result};

pub const BOARD_WIDTH: usize = 3;
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// One of the two players. The human is the maximizing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Automated,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
    pub fn cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Automated => Cell::Automated,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Human,
    Automated,
    #[default]
    Empty,
}
impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Human => Some(Side::Human),
            Cell::Automated => Some(Side::Automated),
            Cell::Empty => None,
        }
    }
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Human => 'X',
            Cell::Automated => 'O',
            Cell::Empty => ' ',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        side.cell()
    }
}

/// Zero-based `(row, col)` coordinate; row 0 is the top row as rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(
            (row as usize) < BOARD_WIDTH && (col as usize) < BOARD_WIDTH,
            "position ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Range-checked constructor for coordinates coming from outside the core.
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    pub fn index(self) -> usize {
        self.row as usize * BOARD_WIDTH + self.col as usize
    }

    pub fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_WIDTH) as u8, (idx % BOARD_WIDTH) as u8)
    }

    /// Every cell in row-major order. Search and move selection rely on this
    /// order for tie-breaking.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELL_COUNT).map(Pos::from_index)
    }
}
