//! Console front end for the tic-tac-toe minimax engine
//!
//! The binary reads moves such as `b2` from stdin, draws the board after
//! every move and lets [`minimax_engine::MinimaxEngine`] answer for `O`.
//!
//! # Usage
//!
//! ```bash
//! # Default search depth (5)
//! cargo run -p ttt_console
//!
//! # Deeper search with debug logging on stderr
//! cargo run -p ttt_console -- --depth 9 --verbose
//!
//! # Settings from a file
//! cargo run -p ttt_console -- --config tictactoe.toml
//! ```

mod config;
mod game;

pub use config::*;
pub use game::*;
