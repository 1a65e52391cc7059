//! The root replay record.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::config::DecodeConfig;
use crate::config::format::{MAGIC, MAX_SUPPORTED_VERSION};
use crate::error::{Error, Result};
use crate::replay::codec::{read_list, read_list_with, read_section_start, write_list, write_section_start};
use crate::replay::{
    ControllerOffsets, Frame, Height, Info, Note, Pause, Record, Section, TricksReplay, UserData,
    Wall,
};

/// A complete replay.
///
/// `controller_offsets` and `user_data` form an optional trailer: older
/// files end after `pauses`. The trailer is written only when
/// `controller_offsets` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Bsor {
    pub file_version: u8,
    pub info: Info,
    pub frames: Vec<Frame>,
    pub notes: Vec<Note>,
    pub walls: Vec<Wall>,
    pub heights: Vec<Height>,
    pub pauses: Vec<Pause>,
    pub controller_offsets: Option<ControllerOffsets>,
    pub user_data: Vec<UserData>,
}

impl Default for Bsor {
    fn default() -> Self {
        Self {
            file_version: MAX_SUPPORTED_VERSION,
            info: Info::default(),
            frames: Vec::new(),
            notes: Vec::new(),
            walls: Vec::new(),
            heights: Vec::new(),
            pauses: Vec::new(),
            controller_offsets: None,
            user_data: Vec::new(),
        }
    }
}

impl Bsor {
    /// Decodes a replay with default options.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        Self::decode_with(reader, &DecodeConfig::default())
    }

    /// Decodes a replay from any byte stream.
    ///
    /// The root magic is checked before any section is read. A file version
    /// above `config.max_supported_version` only logs a warning.
    pub fn decode_with<R: Read>(reader: R, config: &DecodeConfig) -> Result<Self> {
        let mut reader = ReplayReader::new(reader);

        let found = reader.read_i32()? as u32;
        if found != MAGIC {
            return Err(Error::RootMagic {
                expected: MAGIC,
                found,
            });
        }

        let file_version = reader.read_u8()?;
        if file_version > config.max_supported_version {
            warn!(
                "File is version {} and might not be fully compatible, highest supported version is {}",
                file_version, config.max_supported_version
            );
        }

        read_section_start(&mut reader, Section::Info)?;
        let info = Info::decode(&mut reader)?;

        read_section_start(&mut reader, Section::Frames)?;
        let frames: Vec<Frame> = read_list(&mut reader)?;
        debug!(count = frames.len(), "Read frames");

        read_section_start(&mut reader, Section::Notes)?;
        let notes: Vec<Note> = read_list(&mut reader)?;
        debug!(count = notes.len(), "Read notes");

        read_section_start(&mut reader, Section::Walls)?;
        let walls: Vec<Wall> = read_list(&mut reader)?;

        read_section_start(&mut reader, Section::Heights)?;
        let heights: Vec<Height> = read_list(&mut reader)?;

        read_section_start(&mut reader, Section::Pauses)?;
        let pauses: Vec<Pause> = read_list(&mut reader)?;
        debug!(
            walls = walls.len(),
            heights = heights.len(),
            pauses = pauses.len(),
            "Read events"
        );

        let (controller_offsets, user_data) = if reader.is_at_end()? {
            debug!("No trailer after pauses");
            (None, Vec::new())
        } else {
            read_section_start(&mut reader, Section::ControllerOffsets)?;
            let offsets = ControllerOffsets::decode(&mut reader)?;

            read_section_start(&mut reader, Section::UserData)?;
            let parse_extensions = config.parse_extensions;
            let user_data =
                read_list_with(&mut reader, |r| UserData::decode_with(r, parse_extensions))?;
            (Some(offsets), user_data)
        };

        if !reader.is_at_end()? {
            warn!(
                offset = reader.position(),
                "Ignoring trailing bytes after the last section"
            );
        }

        Ok(Self {
            file_version,
            info,
            frames,
            notes,
            walls,
            heights,
            pauses,
            controller_offsets,
            user_data,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes)
    }

    /// Opens and decodes a replay file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, &DecodeConfig::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening replay {}", path.display());
        let file = File::open(path)?;
        Self::decode_with(BufReader::new(file), config)
    }

    /// Encodes the replay, section by section.
    ///
    /// Fails if there is user data but no controller offsets, since the
    /// trailer cannot hold one without the other.
    pub fn encode<W: Write>(&self, writer: W) -> Result<()> {
        if self.controller_offsets.is_none() && !self.user_data.is_empty() {
            return Err(Error::InvalidValue {
                section: Section::UserData,
                message: "user data requires controller offsets".to_string(),
            });
        }

        let mut writer = ReplayWriter::new(writer);
        writer.write_i32(MAGIC as i32)?;
        writer.write_u8(self.file_version)?;

        write_section_start(&mut writer, Section::Info)?;
        self.info.encode(&mut writer)?;

        write_section_start(&mut writer, Section::Frames)?;
        write_list(&mut writer, &self.frames)?;

        write_section_start(&mut writer, Section::Notes)?;
        write_list(&mut writer, &self.notes)?;

        write_section_start(&mut writer, Section::Walls)?;
        write_list(&mut writer, &self.walls)?;

        write_section_start(&mut writer, Section::Heights)?;
        write_list(&mut writer, &self.heights)?;

        write_section_start(&mut writer, Section::Pauses)?;
        write_list(&mut writer, &self.pauses)?;

        if let Some(offsets) = &self.controller_offsets {
            write_section_start(&mut writer, Section::ControllerOffsets)?;
            offsets.encode(&mut writer)?;

            write_section_start(&mut writer, Section::UserData)?;
            write_list(&mut writer, &self.user_data)?;
        }

        writer.flush()?;
        debug!(bytes = writer.position(), "Encoded replay");
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Encodes the replay into a file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// The first parsed tricks replay in the user data, if any.
    pub fn tricks_replay(&self) -> Option<&TricksReplay> {
        self.user_data.iter().find_map(UserData::tricks_replay)
    }
}
