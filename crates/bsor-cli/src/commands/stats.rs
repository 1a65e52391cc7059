//! Stats command implementation.

use std::path::Path;

use anyhow::Result;
use bsor_core::export::{format_accuracy_grid, format_stats_console};
use bsor_core::{AccuracyGrid, Config, calc_stats};

/// Print the score summary of a replay
pub fn run(file: &Path, config: &Config, json: bool, grid: bool) -> Result<()> {
    let replay = super::open_replay(file, config)?;
    let summary = calc_stats(&replay)?.summary();

    if json {
        println!("{}", summary);
        return Ok(());
    }

    println!("{}", format_stats_console(&replay, &summary));
    if grid {
        let accuracy = AccuracyGrid::from_notes(&replay.notes);
        println!("{}", format_accuracy_grid(&accuracy));
    }

    Ok(())
}
