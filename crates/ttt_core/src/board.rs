use std::fmt;

use crate::error::{Error, Result};
use crate::types::*;

/// 3x3 grid plus the stack of placed positions used for undo.
///
/// The history is a fixed nine-slot array: a game can never hold more moves
/// than there are cells. Only `history[..history_len]` is meaningful.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    history: [Pos; CELL_COUNT],
    history_len: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.history() == other.history()
    }
}
impl Eq for Board {}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
            history: [Pos { row: 0, col: 0 }; CELL_COUNT],
            history_len: 0,
        }
    }

    /// Builds a board from three rows of `X`, `O` and blank (`' '`, `.` or `-`)
    /// characters, top row first. Pieces are recorded in row-major order.
    pub fn from_rows(rows: [&str; BOARD_WIDTH]) -> Result<Self> {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width < BOARD_WIDTH {
                return Err(Error::InvalidLayout {
                    reason: format!("row {} '{}' has only {} cells", r, row, width),
                });
            }
            for (c, ch) in row.chars().enumerate() {
                let pos = Pos::try_new(r, c)?;
                let side = match ch {
                    'X' | 'x' => Side::Human,
                    'O' | 'o' => Side::Automated,
                    ' ' | '.' | '-' => continue,
                    other => {
                        return Err(Error::InvalidLayout {
                            reason: format!("unexpected character '{}' in row {}", other, r),
                        })
                    }
                };
                board.push(pos, side);
            }
        }
        Ok(board)
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.index()]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_WIDTH + col]
    }

    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.cell(pos).is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.history_len == CELL_COUNT
    }

    /// Number of pieces on the board.
    pub fn moves_played(&self) -> usize {
        self.history_len
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.history_len
    }

    /// Placed positions, oldest first.
    pub fn history(&self) -> &[Pos] {
        &self.history[..self.history_len]
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history().last().copied()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty_at(pos))
    }

    /// Places `side` on `pos`.
    ///
    /// Panics if the cell is occupied: callers only push onto cells they have
    /// just checked to be empty. Use [`Board::try_push`] for untrusted input.
    pub fn push(&mut self, pos: Pos, side: Side) {
        assert!(
            self.is_empty_at(pos),
            "push onto occupied cell ({}, {})",
            pos.row,
            pos.col
        );
        self.cells[pos.index()] = side.cell();
        self.history[self.history_len] = pos;
        self.history_len += 1;
    }

    pub fn try_push(&mut self, pos: Pos, side: Side) -> Result<()> {
        if !self.is_empty_at(pos) {
            return Err(Error::CellOccupied { pos });
        }
        self.push(pos, side);
        Ok(())
    }

    /// Undoes the most recent push and returns the position it cleared.
    ///
    /// Panics on a board with no moves.
    pub fn pop(&mut self) -> Pos {
        assert!(self.history_len > 0, "pop on a board with no moves");
        self.history_len -= 1;
        let pos = self.history[self.history_len];
        self.cells[pos.index()] = Cell::Empty;
        pos
    }

    /// Plays `side` on `pos`, runs `f` on the resulting board, then undoes
    /// the move before returning `f`'s result.
    pub fn with_move<R>(&mut self, pos: Pos, side: Side, f: impl FnOnce(&mut Board) -> R) -> R {
        self.push(pos, side);
        let result = f(self);
        let undone = self.pop();
        debug_assert_eq!(undone, pos, "tentative move was not the last move on the board");
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            writeln!(f, "    +---+---+---+")?;
            write!(f, " {}  |", BOARD_WIDTH - row)?;
            for col in 0..BOARD_WIDTH {
                write!(f, " {} |", self.cell_at(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    +---+---+---+")?;
        writeln!(f, "      a   b   c")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
