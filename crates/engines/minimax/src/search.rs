//! Exhaustive minimax search (no pruning, no caching)

use tracing::trace;
use ttt_core::{evaluate, Board, Error, Pos, Result, Score, Side};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including the root of every minimax call
    pub nodes: u64,
    /// Deepest ply reached below the board the search started from
    pub max_ply: u8,
}

/// Minimax value of `board` looking `depth` plies ahead.
///
/// The human is the maximizing side. `board` is identical before and after
/// the call.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool) -> Score {
    let mut stats = SearchStats::default();
    minimax_with_stats(board, depth, maximizing, &mut stats)
}

pub fn minimax_with_stats(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Score {
    search(board, depth, maximizing, 0, stats)
}

fn search(
    board: &mut Board,
    depth: u8,
    maximizing: bool,
    ply: u8,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;
    stats.max_ply = stats.max_ply.max(ply);

    let value = evaluate(board);
    if depth == 0 || value != 0 {
        return value;
    }
    if board.is_full() {
        return 0; // draw
    }

    let side = if maximizing { Side::Human } else { Side::Automated };
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in Pos::all() {
        if !board.is_empty_at(pos) {
            continue;
        }
        let score = board.with_move(pos, side, |b| {
            search(b, depth - 1, !maximizing, ply + 1, stats)
        });
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Picks the automated side's move: the empty cell whose reply value is
/// smallest, the earliest in row-major order on ties.
pub fn best_automated_move(board: &mut Board, depth: u8) -> Result<Pos> {
    let mut stats = SearchStats::default();
    pick_best_move(board, depth, &mut stats).map(|(pos, _)| pos)
}

/// Same as [`best_automated_move`] but also returns the winning value and
/// accumulates node statistics.
///
/// # Arguments
/// * `board` - The position to search; restored before returning
/// * `depth` - Plies searched after each candidate move
/// * `stats` - Counters for nodes visited and deepest ply
///
/// # Returns
/// The chosen cell and its minimax value, or [`Error::NoLegalMove`] on a full board
pub fn pick_best_move(
    board: &mut Board,
    depth: u8,
    stats: &mut SearchStats,
) -> Result<(Pos, Score)> {
    let mut best: Option<(Pos, Score)> = None;

    for pos in Pos::all() {
        if !board.is_empty_at(pos) {
            continue;
        }
        // The reply to an automated move is the human's, hence maximizing.
        let score = board.with_move(pos, Side::Automated, |b| {
            search(b, depth, true, 1, stats)
        });
        trace!(candidate = %pos, score, "scored root move");

        // Strict comparison keeps the first cell on ties.
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((pos, score));
        }
    }

    best.ok_or(Error::NoLegalMove)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
