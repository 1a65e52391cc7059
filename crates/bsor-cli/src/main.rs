mod cli;
mod commands;

use anyhow::{Context, Result};
use bsor_core::Config;
use clap::Parser;
use cli::{Args, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bsor_cli=warn,bsor_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    debug!(?config, "Using config");

    match args.command {
        Command::Stats { file, json, grid } => commands::stats::run(&file, &config, json, grid),
        Command::Export {
            file,
            output,
            frames,
            pretty,
        } => commands::export::run(&file, output.as_deref(), frames, pretty, &config),
        Command::Info { file, json } => commands::info::run(&file, &config, json),
        Command::SetPlatform {
            file,
            platform,
            output,
        } => commands::set_platform::run(&file, &platform, &output, &config),
    }
}
