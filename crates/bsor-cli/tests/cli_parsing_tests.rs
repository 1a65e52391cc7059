//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands.

use std::path::PathBuf;

use clap::Parser;

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{Args, Command};

#[test]
fn test_subcommand_is_required() {
    assert!(Args::try_parse_from(["bsor"]).is_err());
}

#[test]
fn test_parse_stats() {
    let args = Args::try_parse_from(["bsor", "stats", "replay.bsor"]).unwrap();
    assert!(args.config.is_none());
    match args.command {
        Command::Stats { file, json, grid } => {
            assert_eq!(file, PathBuf::from("replay.bsor"));
            assert!(!json);
            assert!(!grid);
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_parse_stats_json() {
    let args = Args::try_parse_from(["bsor", "stats", "replay.bsor", "--json"]).unwrap();
    match args.command {
        Command::Stats { json, .. } => assert!(json),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_parse_export_with_output() {
    let args = Args::try_parse_from([
        "bsor",
        "export",
        "replay.bsor",
        "-o",
        "out.json",
        "--frames",
    ])
    .unwrap();
    match args.command {
        Command::Export {
            file,
            output,
            frames,
            pretty,
        } => {
            assert_eq!(file, PathBuf::from("replay.bsor"));
            assert_eq!(output, Some(PathBuf::from("out.json")));
            assert!(frames);
            assert!(!pretty);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_export_to_stdout() {
    let args = Args::try_parse_from(["bsor", "export", "replay.bsor"]).unwrap();
    match args.command {
        Command::Export { output, .. } => assert!(output.is_none()),
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_info() {
    let args = Args::try_parse_from(["bsor", "info", "a.bsor"]).unwrap();
    assert!(matches!(args.command, Command::Info { json: false, .. }));
}

#[test]
fn test_parse_set_platform() {
    let args = Args::try_parse_from([
        "bsor",
        "set-platform",
        "in.bsor",
        "oculus",
        "--output",
        "out.bsor",
    ])
    .unwrap();
    match args.command {
        Command::SetPlatform {
            file,
            platform,
            output,
        } => {
            assert_eq!(file, PathBuf::from("in.bsor"));
            assert_eq!(platform, "oculus");
            assert_eq!(output, PathBuf::from("out.bsor"));
        }
        _ => panic!("Expected SetPlatform command"),
    }
}

#[test]
fn test_set_platform_requires_output() {
    let result = Args::try_parse_from(["bsor", "set-platform", "in.bsor", "oculus"]);
    assert!(result.is_err());
}

#[test]
fn test_global_config_after_subcommand() {
    let args =
        Args::try_parse_from(["bsor", "stats", "replay.bsor", "--config", "bsor.toml"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("bsor.toml")));
}

#[test]
fn test_missing_file_argument() {
    assert!(Args::try_parse_from(["bsor", "stats"]).is_err());
}
