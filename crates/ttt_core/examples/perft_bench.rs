//! Game-tree enumeration benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p ttt_core -- [depth] [rows]
//!
//! Examples:
//!   # Default: every complete game from the empty board
//!   cargo flamegraph --example perft_bench -p ttt_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p ttt_core -- 6
//!
//!   # Custom depth and position (three rows, top first, '.' for empty)
//!   cargo flamegraph --example perft_bench -p ttt_core -- 7 "X.. .O. ..."

use std::env;
use std::time::Instant;

use ttt_core::{perft, Board, Side};

/// Standard positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, [&str; 3])] = &[
    ("Empty board", ["...", "...", "..."]),
    ("Center opening", ["...", ".X.", "..."]),
    ("Corner opening", ["X..", "...", "..."]),
    ("Center reply", ["X..", ".O.", "..."]),
];

fn side_to_move(board: &Board) -> Side {
    if board.moves_played() % 2 == 0 {
        Side::Human
    } else {
        Side::Automated
    }
}

fn run(name: &str, mut board: Board, depth: u8) -> u64 {
    let to_move = side_to_move(&board);
    let start = Instant::now();
    let nodes = perft(&mut board, to_move, depth);
    let elapsed = start.elapsed();
    println!(
        "{:<16} depth {}: {:>8} leaves in {:>10.3?} ({:.2} Mn/s)",
        name,
        depth,
        nodes,
        elapsed,
        (nodes as f64 / 1_000_000.0) / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    nodes
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    // If rows provided, use single position mode
    if let Some(layout) = args.get(2) {
        let rows: Vec<&str> = layout.split_whitespace().collect();
        let board = match rows.as_slice() {
            [a, b, c] => Board::from_rows([*a, *b, *c]),
            _ => {
                eprintln!("expected three rows separated by spaces, got '{}'", layout);
                std::process::exit(2);
            }
        };
        match board {
            Ok(board) => {
                run("Custom", board, depth);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
        return;
    }

    let mut total = 0u64;
    let start = Instant::now();
    for (name, rows) in TEST_POSITIONS {
        let board = Board::from_rows(*rows).expect("built-in position is valid");
        total += run(name, board, depth);
    }
    println!("Total: {} leaves in {:.3?}", total, start.elapsed());
}
