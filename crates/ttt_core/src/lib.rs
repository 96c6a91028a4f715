pub mod board;
pub mod error;
pub mod eval;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{Error, Result};
pub use eval::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

/// Search depth used by the console game when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

// =============================================================================
// Engine trait
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move chosen for the automated side
    pub best_move: Pos,
    /// Minimax value of that move (negative favours the automated side)
    pub score: Score,
    /// Search depth requested
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait implemented by engines that play the automated side.
pub trait Engine {
    /// Choose a move for the automated side on `board`.
    ///
    /// The board is left untouched. Returns [`Error::NoLegalMove`] when every
    /// cell is occupied.
    fn search(&mut self, board: &Board, depth: u8) -> Result<SearchResult>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
