use crate::{board::Board, eval::winner, types::*};

/// Game-tree leaf count.
/// Expands every empty cell down to `depth` plies, alternating sides from
/// `to_move`; won or full boards are leaves.
pub fn perft(board: &mut Board, to_move: Side, depth: u8) -> u64 {
    if depth == 0 || board.is_full() || winner(board).is_some() {
        return 1;
    }

    let mut nodes = 0u64;
    for pos in Pos::all() {
        if !board.is_empty_at(pos) {
            continue;
        }
        nodes += board.with_move(pos, to_move, |b| perft(b, to_move.other(), depth - 1));
    }
    nodes
}
