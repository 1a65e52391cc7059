//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod export;
pub mod info;
pub mod set_platform;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use bsor_core::{Bsor, Config};
use tracing::info;

/// Open a replay with the configured decode options
pub fn open_replay(path: &Path, config: &Config) -> Result<Bsor> {
    let replay = Bsor::open_with(path, &config.decode)
        .with_context(|| format!("Failed to read replay {}", path.display()))?;
    info!(
        "Loaded {}",
        bsor_core::export::format_replay_summary(&replay)
    );
    Ok(replay)
}
