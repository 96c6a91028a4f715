//! Conversion between board positions and the `a1`..`c3` move notation.
//!
//! Columns are lettered `a`-`c` from the left, rows numbered `1`-`3` from the
//! bottom, so `a3` is the top-left cell `(0, 0)`.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Pos, BOARD_WIDTH};

pub fn pos_to_coord(pos: Pos) -> String {
    let f = (b'a' + pos.col) as char;
    let r = (b'0' + (BOARD_WIDTH as u8 - pos.row)) as char;
    format!("{f}{r}")
}

/// Strict parser: exactly two characters.
pub fn coord_to_pos(c: &str) -> Option<Pos> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'c').contains(&f) || !(b'1'..=b'3').contains(&r) {
        return None;
    }
    Some(Pos::new(b'3' - r, f - b'a'))
}

/// Parses a move typed at the console. Surrounding whitespace is trimmed and
/// anything after the first two characters is ignored.
pub fn parse_move(input: &str) -> Result<Pos> {
    let trimmed = input.trim();
    let head = trimmed.get(..2).and_then(coord_to_pos);
    head.ok_or_else(|| Error::InvalidNotation {
        input: trimmed.to_string(),
    })
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pos_to_coord(*self))
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
