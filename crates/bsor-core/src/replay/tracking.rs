//! Tracked poses: per-frame head and hand positions and controller offsets.

use std::io::{Read, Write};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::error::Result;
use crate::replay::Record;

/// A tracked pose: position plus rotation quaternion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VrObject {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub x_rot: f32,
    pub y_rot: f32,
    pub z_rot: f32,
    pub w_rot: f32,
}

impl VrObject {
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Rotation as `[x, y, z, w]`.
    pub fn rotation(&self) -> [f32; 4] {
        [self.x_rot, self.y_rot, self.z_rot, self.w_rot]
    }
}

impl Record for VrObject {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            x: reader.read_f32()?,
            y: reader.read_f32()?,
            z: reader.read_f32()?,
            x_rot: reader.read_f32()?,
            y_rot: reader.read_f32()?,
            z_rot: reader.read_f32()?,
            w_rot: reader.read_f32()?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_f32(self.x)?;
        writer.write_f32(self.y)?;
        writer.write_f32(self.z)?;
        writer.write_f32(self.x_rot)?;
        writer.write_f32(self.y_rot)?;
        writer.write_f32(self.z_rot)?;
        writer.write_f32(self.w_rot)
    }
}

/// Head and both hands at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub time: f32,
    pub fps: i32,
    pub head: VrObject,
    pub left_hand: VrObject,
    pub right_hand: VrObject,
}

impl Record for Frame {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            time: reader.read_f32()?,
            fps: reader.read_i32()?,
            head: VrObject::decode(reader)?,
            left_hand: VrObject::decode(reader)?,
            right_hand: VrObject::decode(reader)?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_f32(self.time)?;
        writer.write_i32(self.fps)?;
        self.head.encode(writer)?;
        self.left_hand.encode(writer)?;
        self.right_hand.encode(writer)
    }
}

/// Per-controller pose offsets configured by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerOffsets {
    pub left: VrObject,
    pub right: VrObject,
}

impl Record for ControllerOffsets {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        Ok(Self {
            left: VrObject::decode(reader)?,
            right: VrObject::decode(reader)?,
        })
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        self.left.encode(writer)?;
        self.right.encode(writer)
    }
}
