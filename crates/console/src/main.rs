//! Tic-tac-toe CLI
//!
//! Play against the minimax engine in the terminal.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use minimax_engine::MinimaxEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_console::{play, GameConfig};
use ttt_core::Engine;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about = "Play tic-tac-toe against a minimax engine")]
struct Args {
    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search depth (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    // RUST_LOG takes precedence; stdout is reserved for the board.
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    }
    .with_depth_override(args.depth);
    let depth = config.effective_depth();

    let mut engine = MinimaxEngine::new();
    info!(engine = engine.name(), depth, "starting game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = play(stdin.lock(), &mut stdout, &mut engine, depth)?;
    info!(?result, "game finished");
    Ok(())
}
