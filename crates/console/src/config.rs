//! Game configuration loaded from an optional TOML file

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;
use ttt_core::{CELL_COUNT, DEFAULT_SEARCH_DEPTH};

/// Settings for a console game.
///
/// ```toml
/// search_depth = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Plies the engine looks ahead after each of its candidate moves
    pub search_depth: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl GameConfig {
    /// Deepest useful search: a game never lasts longer than the board has cells.
    pub const MAX_DEPTH: u8 = CELL_COUNT as u8;

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid game configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Command line value wins over the file.
    pub fn with_depth_override(mut self, depth: Option<u8>) -> Self {
        if let Some(depth) = depth {
            self.search_depth = depth;
        }
        self
    }

    /// Configured depth clamped to `1..=MAX_DEPTH`.
    pub fn effective_depth(&self) -> u8 {
        let depth = self.search_depth.clamp(1, Self::MAX_DEPTH);
        if depth != self.search_depth {
            warn!(
                requested = self.search_depth,
                used = depth,
                "search depth out of range, clamping"
            );
        }
        depth
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
