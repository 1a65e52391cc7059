//! Configuration and format constants.
//!
//! This module contains:
//! - `format` - wire-format constants (magic numbers, versions, reserved keys)
//! - `scoring` - per-note score caps and multiplier thresholds
//! - `Config` - user-tunable decode and export options, loadable from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire-format constants.
pub mod format {
    /// Root magic number at the start of every replay (`0x442d3d69`).
    pub const MAGIC: u32 = 0x442d3d69;

    /// Highest file version this implementation fully understands.
    pub const MAX_SUPPORTED_VERSION: u8 = 1;

    /// UserData key whose blob carries a tricks replay.
    pub const TRICKS_REPLAY_KEY: &str = "reesabers:tricks-replay";

    /// Magic number at the start of a tricks replay blob.
    pub const TRICKS_REPLAY_MAGIC: i32 = 1630166513;

    /// Only tricks replay version that is validated.
    pub const TRICKS_REPLAY_VERSION: i32 = 1;

    /// Upper bound for list pre-allocation; longer lists grow as they are read.
    pub const MAX_PREALLOCATED_ITEMS: usize = 4096;
}

/// Scoring constants.
pub mod scoring {
    /// Maximum pre-swing (before cut) points.
    pub const MAX_BEFORE_CUT: u32 = 70;

    /// Maximum post-swing (after cut) points.
    pub const MAX_AFTER_CUT: u32 = 30;

    /// Maximum accuracy (distance to center) points.
    pub const MAX_CUT_DISTANCE: u32 = 15;

    /// Fixed accuracy points for burst slider elements.
    pub const BURST_ELEMENT_CUT_DISTANCE: u32 = 20;

    /// Cut distance at which accuracy points reach zero.
    pub const CUT_DISTANCE_RANGE: f64 = 0.3;

    /// Maximum score of a normal note.
    pub const MAX_NOTE_SCORE: u64 = 115;

    /// Maximum score of a burst slider head.
    pub const MAX_BURST_HEAD_SCORE: u64 = 85;

    /// Maximum score of a burst slider element.
    pub const MAX_BURST_ELEMENT_SCORE: u64 = 20;

    /// Highest multiplier.
    pub const MAX_MULTIPLIER: u32 = 8;

    /// Note counts after which the max-score multiplier tier steps up (2, 4, 8).
    pub const MAX_TIER_THRESHOLDS: [u32; 3] = [2, 2 + 4, 2 + 4 + 8];
}

/// Options for decoding a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// File versions above this decode with a compatibility warning.
    pub max_supported_version: u8,
    /// Parse known vendor extensions inside UserData blobs.
    pub parse_extensions: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_supported_version: format::MAX_SUPPORTED_VERSION,
            parse_extensions: true,
        }
    }
}

/// Options for the JSON view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Include the per-frame tracking data (usually the bulk of the file).
    pub include_frames: bool,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decode: DecodeConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_hex() {
        assert_eq!(format!("{:#x}", format::MAGIC), "0x442d3d69");
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(scoring::MAX_TIER_THRESHOLDS, [2, 6, 14]);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.decode.max_supported_version, 1);
        assert!(config.decode.parse_extensions);
        assert!(!config.export.include_frames);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            [export]
            pretty = true
            "#,
        )
        .unwrap();
        assert!(config.export.pretty);
        assert!(!config.export.include_frames);
        assert_eq!(config.decode, DecodeConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[decode]\nmax_supported_version = \"two\"");
        assert!(matches!(result, Err(Error::ConfigParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bsor.toml");
        fs::write(&path, "[decode]\nparse_extensions = false\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.decode.parse_extensions);
    }
}
