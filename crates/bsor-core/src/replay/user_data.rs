use std::io::{Read, Write};

use tracing::debug;

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::config::format::TRICKS_REPLAY_KEY;
use crate::error::{Error, Result};
use crate::replay::{Record, Section, TricksReplay};

/// Contents of a UserData blob.
#[derive(Debug, Clone, PartialEq)]
pub enum UserDataPayload {
    /// Opaque bytes, stored as read.
    Raw(Vec<u8>),
    /// A parsed tricks replay (key `reesabers:tricks-replay`).
    Tricks(TricksReplay),
}

/// A keyed blob appended by a mod or tool.
#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub key: String,
    pub payload: UserDataPayload,
}

impl UserData {
    pub fn raw(key: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            payload: UserDataPayload::Raw(bytes),
        }
    }

    pub fn tricks(replay: TricksReplay) -> Self {
        Self {
            key: TRICKS_REPLAY_KEY.to_string(),
            payload: UserDataPayload::Tricks(replay),
        }
    }

    /// Decodes one entry. With `parse_extensions`, blobs under a known key
    /// are parsed; a blob that fails to parse stays raw.
    pub fn decode_with<R: Read>(reader: &mut ReplayReader<R>, parse_extensions: bool) -> Result<Self> {
        let key = reader.read_string()?;
        let bytes = reader.read_blob()?;
        debug!(key = %key, len = bytes.len(), "Read user data");

        let payload = if parse_extensions && key == TRICKS_REPLAY_KEY {
            match TricksReplay::parse(&bytes) {
                Some(replay) => UserDataPayload::Tricks(replay),
                None => UserDataPayload::Raw(bytes),
            }
        } else {
            UserDataPayload::Raw(bytes)
        };

        Ok(Self { key, payload })
    }

    /// The blob as it goes on the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match &self.payload {
            UserDataPayload::Raw(bytes) => Ok(bytes.clone()),
            UserDataPayload::Tricks(replay) => replay.to_bytes(),
        }
    }

    pub fn tricks_replay(&self) -> Option<&TricksReplay> {
        match &self.payload {
            UserDataPayload::Tricks(replay) => Some(replay),
            UserDataPayload::Raw(_) => None,
        }
    }
}

impl Record for UserData {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Self::decode_with(reader, true)
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        // any other key would read back as raw bytes
        if matches!(self.payload, UserDataPayload::Tricks(_)) && self.key != TRICKS_REPLAY_KEY {
            return Err(Error::InvalidValue {
                section: Section::UserData,
                message: format!("tricks replay stored under key {:?}", self.key),
            });
        }
        writer.write_string(&self.key)?;
        match &self.payload {
            UserDataPayload::Raw(bytes) => writer.write_blob(bytes),
            UserDataPayload::Tricks(replay) => {
                let scratch = replay.to_bytes()?;
                writer.write_blob(&scratch)
            }
        }
    }
}
