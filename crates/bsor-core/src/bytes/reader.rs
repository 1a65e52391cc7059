//! Position-tracking reader for the replay wire format.
//!
//! `ReplayReader` wraps any `Read` and provides the little-endian primitive
//! reads the structural codec is built from. It counts consumed bytes for
//! diagnostics, remembers which section is being decoded so errors can name
//! it, and supports a single byte of non-consuming lookahead.

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::replay::Section;

/// Upper bound for buffer pre-allocation when reading length-prefixed data.
const MAX_PREALLOCATED_BYTES: usize = 1 << 16;

/// A counting, peekable reader over a replay byte stream.
///
/// # Example
///
/// ```
/// use bsor_core::bytes::ReplayReader;
///
/// let data = [0x78, 0x56, 0x34, 0x12, 0x01];
/// let mut reader = ReplayReader::new(&data[..]);
///
/// assert_eq!(reader.read_i32().unwrap(), 0x12345678);
/// assert_eq!(reader.peek_u8().unwrap(), Some(0x01));
/// assert_eq!(reader.position(), 4);
/// assert!(reader.read_bool().unwrap());
/// assert_eq!(reader.peek_u8().unwrap(), None);
/// ```
pub struct ReplayReader<R> {
    inner: R,
    peeked: Option<u8>,
    offset: u64,
    section: Section,
}

impl<R: Read> ReplayReader<R> {
    /// Creates a reader positioned at the start of the replay header.
    pub fn new(inner: R) -> Self {
        Self::for_section(inner, Section::Header)
    }

    /// Creates a reader whose errors are attributed to `section`.
    pub fn for_section(inner: R, section: Section) -> Self {
        Self {
            inner,
            peeked: None,
            offset: 0,
            section,
        }
    }

    /// Returns the number of bytes consumed so far.
    ///
    /// A peeked byte is not counted until it is actually read.
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Returns the section currently being decoded.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Sets the section errors are attributed to.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Consumes the reader, returning the wrapped stream.
    ///
    /// A byte buffered by [`peek_u8`](Self::peek_u8) is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Looks at the next byte without consuming it.
    ///
    /// Returns `Ok(None)` at the end of the stream.
    pub fn peek_u8(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.peeked {
            return Ok(Some(byte));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.peeked = Some(buf[0]);
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(self.io_error(e)),
            }
        }
    }

    /// Returns true if no bytes remain.
    pub fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.peek_u8()?.is_none())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let result = ReadBytesExt::read_u8(self);
        result.map_err(|e| self.io_error(e))
    }

    /// Reads a boolean byte. Only `1` is true.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? == 1)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let result = ReadBytesExt::read_i32::<LittleEndian>(self);
        result.map_err(|e| self.io_error(e))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let result = ReadBytesExt::read_i64::<LittleEndian>(self);
        result.map_err(|e| self.io_error(e))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let result = ReadBytesExt::read_f32::<LittleEndian>(self);
        result.map_err(|e| self.io_error(e))
    }

    /// Reads three consecutive floats.
    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    /// Reads an `i32` length or count prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the prefix is negative.
    pub fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| self.invalid_value(format!("negative length {}", len)))
    }

    /// Reads exactly `len` bytes.
    ///
    /// The buffer only grows as data arrives, so a bogus length fails with
    /// [`Error::Truncated`] instead of allocating up front.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOCATED_BYTES));
        let result = self.by_ref().take(len as u64).read_to_end(&mut buf);
        let read = result.map_err(|e| self.io_error(e))?;

        if read != len {
            return Err(Error::Truncated {
                section: self.section,
                offset: self.offset,
            });
        }
        Ok(buf)
    }

    /// Reads a length-prefixed UTF-8 string. A zero length is the empty string.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_len()?;
        if len == 0 {
            return Ok(String::new());
        }

        let start = self.offset;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            section: self.section,
            offset: start,
        })
    }

    /// Reads a length-prefixed byte blob.
    pub fn read_blob(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len()?;
        self.read_bytes(len)
    }

    /// Builds an [`Error::InvalidValue`] for the current section.
    pub fn invalid_value(&self, message: impl Into<String>) -> Error {
        Error::InvalidValue {
            section: self.section,
            message: message.into(),
        }
    }

    fn io_error(&self, e: io::Error) -> Error {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated {
                section: self.section,
                offset: self.offset,
            }
        } else {
            Error::Io(e)
        }
    }
}

impl<R: Read> Read for ReplayReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(byte) = self.peeked.take() {
            buf[0] = byte;
            self.offset += 1;
            return Ok(1);
        }

        let n = self.inner.read(buf)?;
        self.offset += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_i32() {
        let data = [0x78, 0x56, 0x34, 0x12];
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.read_i32().unwrap(), 0x12345678);
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_read_i64_negative() {
        let data = (-2i64).to_le_bytes();
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.read_i64().unwrap(), -2);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_read_f32() {
        let data = 1.5f32.to_le_bytes();
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.read_f32().unwrap(), 1.5);
    }

    #[test]
    fn test_read_bool_only_one_is_true() {
        let data = [0x00, 0x01, 0x02];
        let mut reader = ReplayReader::new(&data[..]);

        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(!reader.read_bool().unwrap());
    }

    #[test]
    fn test_read_string() {
        // Length counts bytes, not characters
        let mut data = 6i32.to_le_bytes().to_vec();
        data.extend_from_slice("héllo".as_bytes());
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.read_string().unwrap(), "héllo");
        assert_eq!(reader.position(), 10);
    }

    #[test]
    fn test_read_empty_string() {
        let data = [0x00, 0x00, 0x00, 0x00, 0xFF];
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.read_string().unwrap(), "");
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let mut data = 2i32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xC3, 0x28]);
        let mut reader = ReplayReader::for_section(&data[..], Section::Info);

        let result = reader.read_string();
        assert!(matches!(
            result,
            Err(Error::InvalidUtf8 {
                section: Section::Info,
                offset: 4
            })
        ));
    }

    #[test]
    fn test_read_string_negative_length() {
        let data = (-1i32).to_le_bytes();
        let mut reader = ReplayReader::new(&data[..]);

        assert!(matches!(
            reader.read_string(),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_truncated_read_names_section() {
        let data = [0x01, 0x02];
        let mut reader = ReplayReader::for_section(&data[..], Section::Frames);

        let result = reader.read_i32();
        assert!(matches!(
            result,
            Err(Error::Truncated {
                section: Section::Frames,
                ..
            })
        ));
    }

    #[test]
    fn test_truncated_blob() {
        let mut data = 100i32.to_le_bytes().to_vec();
        data.extend_from_slice(&[1, 2, 3]);
        let mut reader = ReplayReader::for_section(&data[..], Section::UserData);

        assert!(matches!(
            reader.read_blob(),
            Err(Error::Truncated {
                section: Section::UserData,
                offset: 7
            })
        ));
    }

    #[test]
    fn test_huge_length_does_not_allocate_up_front() {
        let data = i32::MAX.to_le_bytes();
        let mut reader = ReplayReader::new(&data[..]);

        assert!(matches!(reader.read_blob(), Err(Error::Truncated { .. })));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let data = [0x06, 0x07];
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.peek_u8().unwrap(), Some(0x06));
        assert_eq!(reader.peek_u8().unwrap(), Some(0x06));
        assert_eq!(reader.position(), 0);

        assert_eq!(reader.read_u8().unwrap(), 0x06);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0x07);
        assert!(reader.is_at_end().unwrap());
    }

    #[test]
    fn test_peeked_byte_feeds_multi_byte_read() {
        let data = 0x0A0B0C0Di32.to_le_bytes();
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.peek_u8().unwrap(), Some(0x0D));
        assert_eq!(reader.read_i32().unwrap(), 0x0A0B0C0D);
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_peek_at_end() {
        let data: [u8; 0] = [];
        let mut reader = ReplayReader::new(&data[..]);

        assert_eq!(reader.peek_u8().unwrap(), None);
        assert!(matches!(reader.read_u8(), Err(Error::Truncated { .. })));
    }
}
