//! Record trait and the shared section/list framing.

use std::io::{Read, Write};

use tracing::debug;

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::config::format::MAX_PREALLOCATED_ITEMS;
use crate::error::{Error, Result};
use crate::replay::Section;

/// A structured record with a fixed wire layout.
///
/// Implementations read and write their fields in declaration order through
/// the primitive codec. Section magic bytes and list counts are framing and
/// belong to the caller, not to the record.
pub trait Record: Sized {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self>;

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()>;
}

/// Reads and checks the magic byte that opens a root section.
pub(crate) fn read_section_start<R: Read>(
    reader: &mut ReplayReader<R>,
    section: Section,
) -> Result<()> {
    reader.set_section(section);
    let expected = section
        .magic()
        .ok_or_else(|| reader.invalid_value("section has no magic byte"))?;

    let found = reader.read_u8()?;
    if found != expected {
        return Err(Error::SectionMagic {
            section,
            expected,
            found,
        });
    }

    debug!(%section, offset = reader.position(), "Reading section");
    Ok(())
}

pub(crate) fn write_section_start<W: Write>(
    writer: &mut ReplayWriter<W>,
    section: Section,
) -> Result<()> {
    writer.set_section(section);
    let magic = section.magic().ok_or_else(|| Error::InvalidValue {
        section,
        message: "section has no magic byte".to_string(),
    })?;
    writer.write_u8(magic)
}

/// Reads an `i32` count followed by that many records.
pub(crate) fn read_list<R: Read, T: Record>(reader: &mut ReplayReader<R>) -> Result<Vec<T>> {
    read_list_with(reader, T::decode)
}

/// Like [`read_list`], with a custom element decoder.
pub(crate) fn read_list_with<R, T, F>(reader: &mut ReplayReader<R>, mut decode: F) -> Result<Vec<T>>
where
    R: Read,
    F: FnMut(&mut ReplayReader<R>) -> Result<T>,
{
    let count = reader.read_len()?;
    let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATED_ITEMS));
    for _ in 0..count {
        items.push(decode(reader)?);
    }
    Ok(items)
}

pub(crate) fn write_list<W: Write, T: Record>(
    writer: &mut ReplayWriter<W>,
    items: &[T],
) -> Result<()> {
    writer.write_len(items.len())?;
    for item in items {
        item.encode(writer)?;
    }
    Ok(())
}
