//! Primitive codec: little-endian integers, floats, booleans, strings and blobs.

mod reader;
mod writer;

pub use reader::ReplayReader;
pub use writer::ReplayWriter;
