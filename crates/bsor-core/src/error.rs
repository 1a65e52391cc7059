use thiserror::Error;

use crate::replay::Section;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid replay magic: expected {expected:#x}, got {found:#x}")]
    RootMagic { expected: u32, found: u32 },

    #[error("{section} magic number must be {expected}, got {found}")]
    SectionMagic {
        section: Section,
        expected: u8,
        found: u8,
    },

    #[error("Unexpected end of data in {section} at offset {offset}")]
    Truncated { section: Section, offset: u64 },

    #[error("Invalid UTF-8 string in {section} at offset {offset}")]
    InvalidUtf8 { section: Section, offset: u64 },

    #[error("Invalid value in {section}: {message}")]
    InvalidValue { section: Section, message: String },

    #[error("{what} index out of range: {value}")]
    InvalidIndex { what: &'static str, value: i32 },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The section the error was raised in, if it came from the decoder.
    pub fn section(&self) -> Option<Section> {
        match self {
            Error::SectionMagic { section, .. }
            | Error::Truncated { section, .. }
            | Error::InvalidUtf8 { section, .. }
            | Error::InvalidValue { section, .. } => Some(*section),
            Error::RootMagic { .. } => Some(Section::Header),
            _ => None,
        }
    }

    /// True for errors that mean the input itself is malformed.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::RootMagic { .. }
                | Error::SectionMagic { .. }
                | Error::InvalidValue { .. }
                | Error::InvalidIndex { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
