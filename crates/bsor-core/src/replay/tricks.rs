//! Saber trick playback carried inside a UserData blob.
//!
//! Layout: `i32 magic`, `i32 version`, then the left and right saber
//! segment lists. Each segment is a list of timestamped poses.

use std::io::{Read, Write};

use tracing::warn;

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::config::format::{TRICKS_REPLAY_MAGIC, TRICKS_REPLAY_VERSION};
use crate::error::Result;
use crate::replay::codec::{read_list, write_list};
use crate::replay::{Record, Section, VrObject};

/// One sampled saber pose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReeFrame {
    pub song_time: f32,
    pub position: VrObject,
}

impl Record for ReeFrame {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            song_time: reader.read_f32()?,
            position: VrObject::decode(reader)?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_f32(self.song_time)?;
        self.position.encode(writer)
    }
}

/// A continuous stretch of trick motion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    pub frames: Vec<ReeFrame>,
}

impl Record for Segment {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            frames: read_list(reader)?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        write_list(writer, &self.frames)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TricksReplay {
    pub version: i32,
    pub left: Vec<Segment>,
    pub right: Vec<Segment>,
}

impl Default for TricksReplay {
    fn default() -> Self {
        Self {
            version: TRICKS_REPLAY_VERSION,
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl TricksReplay {
    /// Parses a complete blob.
    ///
    /// Returns `None` (after logging a warning) when the blob does not start
    /// with the tricks magic, fails to decode, or has bytes left over. The
    /// caller keeps the raw bytes in that case.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let mut reader = ReplayReader::for_section(bytes, Section::TricksReplay);

        let magic = match reader.read_i32() {
            Ok(magic) => magic,
            Err(e) => {
                warn!("Tricks replay too short to hold a header: {}", e);
                return None;
            }
        };
        if magic != TRICKS_REPLAY_MAGIC {
            warn!(
                "Tricks replay magic must be {}, got {}; keeping raw bytes",
                TRICKS_REPLAY_MAGIC, magic
            );
            return None;
        }

        let replay = match Self::decode_body(&mut reader) {
            Ok(replay) => replay,
            Err(e) => {
                warn!("Failed to parse tricks replay, keeping raw bytes: {}", e);
                return None;
            }
        };

        match reader.is_at_end() {
            Ok(true) => Some(replay),
            Ok(false) => {
                warn!(
                    offset = reader.position(),
                    "Tricks replay has trailing bytes; keeping raw bytes"
                );
                None
            }
            Err(e) => {
                warn!("Failed to parse tricks replay, keeping raw bytes: {}", e);
                None
            }
        }
    }

    fn decode_body<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        let version = reader.read_i32()?;
        if version != TRICKS_REPLAY_VERSION {
            warn!(
                "Tricks replay is version {}, only version {} is known; parsing anyway",
                version, TRICKS_REPLAY_VERSION
            );
        }

        Ok(Self {
            version,
            left: read_list(reader)?,
            right: read_list(reader)?,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ReplayWriter::new(Vec::new());
        writer.set_section(Section::TricksReplay);
        self.encode(&mut writer)?;
        Ok(writer.into_inner())
    }

    pub fn frame_count(&self) -> usize {
        self.left
            .iter()
            .chain(&self.right)
            .map(|segment| segment.frames.len())
            .sum()
    }
}

impl Record for TricksReplay {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        let magic = reader.read_i32()?;
        if magic != TRICKS_REPLAY_MAGIC {
            return Err(reader.invalid_value(format!(
                "tricks replay magic must be {}, got {}",
                TRICKS_REPLAY_MAGIC, magic
            )));
        }
        Self::decode_body(reader)
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_i32(TRICKS_REPLAY_MAGIC)?;
        writer.write_i32(self.version)?;
        write_list(writer, &self.left)?;
        write_list(writer, &self.right)
    }
}
