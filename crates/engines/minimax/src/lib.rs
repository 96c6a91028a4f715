//! Minimax Tic-Tac-Toe Engine
//!
//! Plays the automated side by searching every continuation up to a fixed
//! depth. There is no pruning and no transposition cache: the 3x3 tree is
//! small enough to walk in full.

mod search;

use tracing::{debug, debug_span};
use ttt_core::{Board, Engine, Result, SearchResult};

/// Engine driving [`pick_best_move`] over a private copy of the board.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, depth: u8) -> Result<SearchResult> {
        let _span = debug_span!(
            "minimax_search",
            depth,
            moves_played = board.moves_played()
        )
        .entered();

        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let (best_move, score) = pick_best_move(&mut scratch, depth, &mut stats)?;
        self.nodes = stats.nodes;

        debug!(
            best_move = %best_move,
            score,
            nodes = stats.nodes,
            max_ply = stats.max_ply,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: stats.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{best_automated_move, minimax, minimax_with_stats, pick_best_move, SearchStats};
