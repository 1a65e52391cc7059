//! Set-platform command: edit one header field and re-encode.

use std::path::Path;

use anyhow::{Context, Result};
use bsor_core::Config;
use tracing::info;

/// Rewrite a replay with a different platform value
pub fn run(file: &Path, platform: &str, output: &Path, config: &Config) -> Result<()> {
    let mut replay = super::open_replay(file, config)?;

    info!(
        "Changing platform from {:?} to {:?}",
        replay.info.platform, platform
    );
    replay.info.platform = platform.to_string();

    replay
        .save(output)
        .with_context(|| format!("Failed to write replay {}", output.display()))?;
    eprintln!("Saved to: {}", output.display());

    Ok(())
}
