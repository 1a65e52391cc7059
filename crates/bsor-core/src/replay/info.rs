use std::io::{Read, Write};

use chrono::{DateTime, Utc};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::error::Result;
use crate::replay::Record;

/// Replay header: who played what, on which setup, with which settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub version: String,
    pub game_version: String,
    /// Unix time in seconds, as a decimal string.
    pub timestamp: String,
    pub player_id: String,
    pub player_name: String,
    pub platform: String,
    pub tracking_system: String,
    pub hmd: String,
    pub controller: String,
    pub song_hash: String,
    pub song_name: String,
    pub mapper: String,
    pub difficulty: String,
    pub score: i32,
    pub mode: String,
    pub environment: String,
    /// Comma-separated modifier codes.
    pub modifiers: String,
    pub jump_distance: f32,
    pub left_handed: bool,
    pub height: f32,
    pub start_time: f32,
    pub fail_time: f32,
    pub speed: f32,
}

impl Info {
    /// Parses `timestamp` as Unix seconds.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Individual modifier codes, e.g. `["FS", "GN"]`.
    pub fn modifier_list(&self) -> Vec<&str> {
        self.modifiers
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect()
    }

    /// True if the player failed the map before it ended.
    pub fn failed(&self) -> bool {
        self.fail_time > 0.0
    }
}

impl Record for Info {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            version: reader.read_string()?,
            game_version: reader.read_string()?,
            timestamp: reader.read_string()?,
            player_id: reader.read_string()?,
            player_name: reader.read_string()?,
            platform: reader.read_string()?,
            tracking_system: reader.read_string()?,
            hmd: reader.read_string()?,
            controller: reader.read_string()?,
            song_hash: reader.read_string()?,
            song_name: reader.read_string()?,
            mapper: reader.read_string()?,
            difficulty: reader.read_string()?,
            score: reader.read_i32()?,
            mode: reader.read_string()?,
            environment: reader.read_string()?,
            modifiers: reader.read_string()?,
            jump_distance: reader.read_f32()?,
            left_handed: reader.read_bool()?,
            height: reader.read_f32()?,
            start_time: reader.read_f32()?,
            fail_time: reader.read_f32()?,
            speed: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_string(&self.version)?;
        writer.write_string(&self.game_version)?;
        writer.write_string(&self.timestamp)?;
        writer.write_string(&self.player_id)?;
        writer.write_string(&self.player_name)?;
        writer.write_string(&self.platform)?;
        writer.write_string(&self.tracking_system)?;
        writer.write_string(&self.hmd)?;
        writer.write_string(&self.controller)?;
        writer.write_string(&self.song_hash)?;
        writer.write_string(&self.song_name)?;
        writer.write_string(&self.mapper)?;
        writer.write_string(&self.difficulty)?;
        writer.write_i32(self.score)?;
        writer.write_string(&self.mode)?;
        writer.write_string(&self.environment)?;
        writer.write_string(&self.modifiers)?;
        writer.write_f32(self.jump_distance)?;
        writer.write_bool(self.left_handed)?;
        writer.write_f32(self.height)?;
        writer.write_f32(self.start_time)?;
        writer.write_f32(self.fail_time)?;
        writer.write_f32(self.speed)
    }
}
