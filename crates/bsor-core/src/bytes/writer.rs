//! Position-tracking writer for the replay wire format.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::replay::Section;

/// A counting writer producing the little-endian replay primitives.
///
/// # Example
///
/// ```
/// use bsor_core::bytes::ReplayWriter;
///
/// let mut writer = ReplayWriter::new(Vec::new());
/// writer.write_string("abc").unwrap();
/// writer.write_bool(true).unwrap();
///
/// assert_eq!(writer.position(), 8);
/// assert_eq!(writer.into_inner(), [3, 0, 0, 0, b'a', b'b', b'c', 1]);
/// ```
pub struct ReplayWriter<W> {
    inner: W,
    offset: u64,
    section: Section,
}

impl<W: Write> ReplayWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            offset: 0,
            section: Section::Header,
        }
    }

    /// Returns the number of bytes written so far.
    pub fn position(&self) -> u64 {
        self.offset
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, value)?;
        Ok(())
    }

    /// Writes a boolean as `0` or `1`.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        WriteBytesExt::write_i32::<LittleEndian>(self, value)?;
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        WriteBytesExt::write_i64::<LittleEndian>(self, value)?;
        Ok(())
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        WriteBytesExt::write_f32::<LittleEndian>(self, value)?;
        Ok(())
    }

    pub fn write_vec3(&mut self, value: &[f32; 3]) -> Result<()> {
        for component in value {
            self.write_f32(*component)?;
        }
        Ok(())
    }

    /// Writes an `i32` length or count prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `len` does not fit in an `i32`.
    pub fn write_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::InvalidValue {
            section: self.section,
            message: format!("length {} exceeds i32 range", len),
        })?;
        self.write_i32(len)
    }

    /// Writes a length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_blob(value.as_bytes())
    }

    /// Writes a length-prefixed byte blob.
    pub fn write_blob(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_len(bytes.len())?;
        self.write_all(bytes)?;
        Ok(())
    }
}

impl<W: Write> Write for ReplayWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.offset += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
