//! CLI argument definitions for bsor.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bsor")]
#[command(about = "Beat Saber replay (BSOR) inspector", version)]
pub struct Args {
    /// Path to config file (TOML)
    #[arg(short, long, value_name = "FILE", env = "BSOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show score statistics
    Stats {
        /// Replay file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Also show the per-lane accuracy grid
        #[arg(long)]
        grid: bool,
    },
    /// Export a replay as JSON
    Export {
        /// Replay file
        file: PathBuf,
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include per-frame tracking data
        #[arg(long)]
        frames: bool,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Show header fields and section counts
    Info {
        /// Replay file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change the recorded platform and write a new replay
    SetPlatform {
        /// Replay file
        file: PathBuf,
        /// New platform value (e.g. steam, oculus)
        platform: String,
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}
