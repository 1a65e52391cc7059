use std::io::{Read, Write};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::error::Result;
use crate::replay::{Record, SaberType};

/// Geometry and timing of a saber swing through a note.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cut {
    pub speed_ok: bool,
    pub direction_ok: bool,
    pub saber_type_ok: bool,
    pub was_cut_too_soon: bool,
    pub saber_speed: f32,
    pub saber_direction: [f32; 3],
    /// Raw saber code: 0 = right, 1 = left.
    pub saber_type: i32,
    pub time_deviation: f32,
    pub cut_deviation: f32,
    pub cut_point: [f32; 3],
    pub cut_normal: [f32; 3],
    pub cut_distance_to_center: f32,
    pub cut_angle: f32,
    pub before_cut_rating: f32,
    pub after_cut_rating: f32,
}

impl Cut {
    /// Speed, direction and saber were all correct.
    pub fn is_valid(&self) -> bool {
        self.speed_ok && self.direction_ok && self.saber_type_ok
    }

    pub fn saber(&self) -> Option<SaberType> {
        SaberType::from_i32(self.saber_type)
    }
}

impl Record for Cut {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            speed_ok: reader.read_bool()?,
            direction_ok: reader.read_bool()?,
            saber_type_ok: reader.read_bool()?,
            was_cut_too_soon: reader.read_bool()?,
            saber_speed: reader.read_f32()?,
            saber_direction: reader.read_vec3()?,
            saber_type: reader.read_i32()?,
            time_deviation: reader.read_f32()?,
            cut_deviation: reader.read_f32()?,
            cut_point: reader.read_vec3()?,
            cut_normal: reader.read_vec3()?,
            cut_distance_to_center: reader.read_f32()?,
            cut_angle: reader.read_f32()?,
            before_cut_rating: reader.read_f32()?,
            after_cut_rating: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_bool(self.speed_ok)?;
        writer.write_bool(self.direction_ok)?;
        writer.write_bool(self.saber_type_ok)?;
        writer.write_bool(self.was_cut_too_soon)?;
        writer.write_f32(self.saber_speed)?;
        writer.write_vec3(&self.saber_direction)?;
        writer.write_i32(self.saber_type)?;
        writer.write_f32(self.time_deviation)?;
        writer.write_f32(self.cut_deviation)?;
        writer.write_vec3(&self.cut_point)?;
        writer.write_vec3(&self.cut_normal)?;
        writer.write_f32(self.cut_distance_to_center)?;
        writer.write_f32(self.cut_angle)?;
        writer.write_f32(self.before_cut_rating)?;
        writer.write_f32(self.after_cut_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::perfect_cut;

    #[test]
    fn test_cut_wire_size() {
        let mut writer = ReplayWriter::new(Vec::new());
        perfect_cut().encode(&mut writer).unwrap();
        // 4 bools, speed, 3-vector, saber type, 2 deviations, 2 3-vectors, 4 floats
        assert_eq!(writer.position(), 4 + 4 + 12 + 4 + 8 + 24 + 16);
    }

    #[test]
    fn test_cut_round_trip() {
        let cut = Cut {
            saber_direction: [0.1, -0.2, 0.3],
            saber_type: 1,
            time_deviation: -0.012,
            cut_point: [0.5, 1.0, 0.0],
            cut_normal: [0.0, 0.0, 1.0],
            cut_angle: 97.5,
            was_cut_too_soon: true,
            ..perfect_cut()
        };
        let mut writer = ReplayWriter::new(Vec::new());
        cut.encode(&mut writer).unwrap();
        let bytes = writer.into_inner();

        let mut reader = ReplayReader::new(&bytes[..]);
        assert_eq!(Cut::decode(&mut reader).unwrap(), cut);
    }

    #[test]
    fn test_is_valid() {
        assert!(perfect_cut().is_valid());
        let cut = Cut {
            speed_ok: false,
            ..perfect_cut()
        };
        assert!(!cut.is_valid());
    }

    #[test]
    fn test_saber() {
        let mut cut = perfect_cut();
        cut.saber_type = 1;
        assert_eq!(cut.saber(), Some(SaberType::Left));
        cut.saber_type = 5;
        assert_eq!(cut.saber(), None);
    }
}
