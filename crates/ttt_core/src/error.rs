//! Error types shared by the board, the engines and the console front end

use thiserror::Error;

use crate::types::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal move: every cell is occupied")]
    NoLegalMove,

    #[error("cell {pos} is already occupied")]
    CellOccupied { pos: Pos },

    #[error("position ({row}, {col}) is off the board (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("'{input}' is not a move (expected a column a-c followed by a row 1-3, e.g. b2)")]
    InvalidNotation { input: String },

    #[error("invalid board layout: {reason}")]
    InvalidLayout { reason: String },
}

/// Convenience alias for results carrying the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
