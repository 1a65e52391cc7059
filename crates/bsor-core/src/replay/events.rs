use std::io::{Read, Write};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::error::Result;
use crate::replay::Record;

/// A wall (obstacle) the player's head collided with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wall {
    pub id: i32,
    pub energy: f32,
    pub time: f32,
    pub spawn_time: f32,
}

impl Record for Wall {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            id: reader.read_i32()?,
            energy: reader.read_f32()?,
            time: reader.read_f32()?,
            spawn_time: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_i32(self.id)?;
        writer.write_f32(self.energy)?;
        writer.write_f32(self.time)?;
        writer.write_f32(self.spawn_time)
    }
}

/// Automatic player height change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Height {
    pub height: f32,
    pub time: f32,
}

impl Record for Height {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            height: reader.read_f32()?,
            time: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_f32(self.height)?;
        writer.write_f32(self.time)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pause {
    pub duration: i64,
    pub time: f32,
}

impl Record for Pause {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            duration: reader.read_i64()?,
            time: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_i64(self.duration)?;
        writer.write_f32(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_record<T: Record>(record: &T) -> Vec<u8> {
        let mut writer = ReplayWriter::new(Vec::new());
        record.encode(&mut writer).unwrap();
        writer.into_inner()
    }

    #[test]
    fn test_wall_layout() {
        let wall = Wall {
            id: 42,
            energy: 0.75,
            time: 10.0,
            spawn_time: 9.0,
        };
        let bytes = encode_record(&wall);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..4], &42i32.to_le_bytes());

        let mut reader = ReplayReader::new(&bytes[..]);
        assert_eq!(Wall::decode(&mut reader).unwrap(), wall);
    }

    #[test]
    fn test_pause_duration_is_64_bit() {
        let pause = Pause {
            duration: 5_000_000_000,
            time: 33.5,
        };
        let bytes = encode_record(&pause);
        assert_eq!(bytes.len(), 12);

        let mut reader = ReplayReader::new(&bytes[..]);
        assert_eq!(Pause::decode(&mut reader).unwrap(), pause);
    }

    #[test]
    fn test_height_round_trip() {
        let height = Height {
            height: 1.72,
            time: 4.0,
        };
        let bytes = encode_record(&height);

        let mut reader = ReplayReader::new(&bytes[..]);
        assert_eq!(Height::decode(&mut reader).unwrap(), height);
    }
}
