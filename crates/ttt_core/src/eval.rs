use crate::{board::Board, types::*};

/// Terminal evaluation: positive favours the human, negative the automated side.
pub type Score = i32;

pub const HUMAN_WIN: Score = 10;
pub const AUTOMATED_WIN: Score = -10;
pub const NEUTRAL: Score = 0;

const fn p(row: u8, col: u8) -> Pos {
    Pos { row, col }
}

/// Every winning line, in the order they are checked: rows, columns,
/// main diagonal, anti-diagonal.
pub const LINES: [[Pos; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// Side owning the first completed line, if any.
pub fn winner(board: &Board) -> Option<Side> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.cell(a);
        if cell == board.cell(b) && cell == board.cell(c) {
            cell.side()
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> Score {
    match winner(board) {
        Some(Side::Human) => HUMAN_WIN,
        Some(Side::Automated) => AUTOMATED_WIN,
        None => NEUTRAL,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    AutomatedWin,
    Draw,
}

/// Final result of the game, or `None` while it is still running.
pub fn outcome(board: &Board) -> Option<Outcome> {
    let score = evaluate(board);
    if score > 0 {
        Some(Outcome::HumanWin)
    } else if score < 0 {
        Some(Outcome::AutomatedWin)
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
