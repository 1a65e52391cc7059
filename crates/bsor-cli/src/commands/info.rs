//! Info command implementation.

use std::path::Path;

use anyhow::Result;
use bsor_core::{Bsor, Config, ToView};
use serde_json::json;

/// Print header fields and section counts
pub fn run(file: &Path, config: &Config, json: bool) -> Result<()> {
    let replay = super::open_replay(file, config)?;

    if json {
        let view = json!({
            "file_version": replay.file_version,
            "info": replay.info.to_view(),
            "counts": section_counts(&replay),
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let info = &replay.info;
    println!("BSOR version : {}", replay.file_version);
    println!("Mod version  : {}", info.version);
    println!("Game version : {}", info.game_version);
    match info.recorded_at() {
        Some(time) => println!("Recorded     : {}", time.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("Recorded     : {} (unparsed)", info.timestamp),
    }
    println!("Player       : {} ({})", info.player_name, info.player_id);
    println!("Platform     : {}", info.platform);
    println!("Hardware     : {} / {} / {}", info.hmd, info.controller, info.tracking_system);
    println!("Song         : {} by {}", info.song_name, info.mapper);
    println!("Hash         : {}", info.song_hash);
    println!("Difficulty   : {} {}", info.difficulty, info.mode);
    println!("Environment  : {}", info.environment);
    println!("Score        : {}", info.score);
    println!("Modifiers    : {}", info.modifier_list().join(" "));
    if info.failed() {
        println!("Failed at    : {:.2}s", info.fail_time);
    }
    println!();
    for (name, count) in section_counts(&replay) {
        println!("{:<13}: {}", name, count);
    }
    if let Some(tricks) = replay.tricks_replay() {
        println!(
            "{:<13}: {} segments, {} frames",
            "tricks",
            tricks.left.len() + tricks.right.len(),
            tricks.frame_count()
        );
    }

    Ok(())
}

fn section_counts(replay: &Bsor) -> Vec<(&'static str, usize)> {
    vec![
        ("frames", replay.frames.len()),
        ("notes", replay.notes.len()),
        ("walls", replay.walls.len()),
        ("heights", replay.heights.len()),
        ("pauses", replay.pauses.len()),
        ("user_data", replay.user_data.len()),
    ]
}
