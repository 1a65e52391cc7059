//! Export command for writing the JSON view of a replay.

use std::path::Path;

use anyhow::Result;
use bsor_core::Config;
use bsor_core::config::ExportConfig;
use bsor_core::export::{export_replay_json, replay_to_json};

/// Export a replay as JSON to a file or stdout
pub fn run(
    file: &Path,
    output: Option<&Path>,
    frames: bool,
    pretty: bool,
    config: &Config,
) -> Result<()> {
    let replay = super::open_replay(file, config)?;
    let export_config = ExportConfig {
        include_frames: frames || config.export.include_frames,
        pretty: pretty || config.export.pretty,
    };

    if let Some(output_path) = output {
        export_replay_json(output_path, &replay, &export_config)?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        println!("{}", replay_to_json(&replay, &export_config)?);
    }

    Ok(())
}
