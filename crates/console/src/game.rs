//! Console game loop: the human plays `X`, the engine plays `O`.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};
use ttt_core::{outcome, parse_move, Board, Engine, Outcome, Side};

pub fn outcome_message(result: Outcome) -> &'static str {
    match result {
        Outcome::HumanWin => "You win!",
        Outcome::AutomatedWin => "You lose!",
        Outcome::Draw => "draw.",
    }
}

/// Prints the board and, if the game is over, the closing message.
fn show<W: Write>(out: &mut W, board: &Board) -> anyhow::Result<Option<Outcome>> {
    write!(out, "{board}")?;
    let result = outcome(board);
    if let Some(result) = result {
        writeln!(out, "{}", outcome_message(result))?;
    }
    out.flush()?;
    Ok(result)
}

/// Plays one game reading human moves line by line from `input`.
///
/// Returns the final outcome, or `None` if the input ended first.
pub fn play<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    engine: &mut dyn Engine,
    depth: u8,
) -> anyhow::Result<Option<Outcome>> {
    let mut board = Board::new();
    engine.new_game();
    show(out, &board)?;

    for line in input.lines() {
        let line = line.context("failed to read move")?;
        if line.trim().is_empty() {
            continue;
        }

        let pos = match parse_move(&line) {
            Ok(pos) => pos,
            Err(e) => {
                debug!(input = %line.trim(), "ignoring unparseable move");
                writeln!(out, "{e}")?;
                continue;
            }
        };
        if let Err(e) = board.try_push(pos, Side::Human) {
            writeln!(out, "{e}")?;
            continue;
        }
        info!(%pos, "human move");
        if let Some(result) = show(out, &board)? {
            return Ok(Some(result));
        }

        let reply = engine
            .search(&board, depth)
            .with_context(|| format!("{} failed to choose a move", engine.name()))?;
        board.push(reply.best_move, Side::Automated);
        info!(pos = %reply.best_move, score = reply.score, nodes = reply.nodes, "engine move");
        if let Some(result) = show(out, &board)? {
            return Ok(Some(result));
        }
    }

    Ok(None)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
