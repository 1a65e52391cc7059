//! Replay data model and its binary codec.
//!
//! This module contains:
//! - `Bsor` - the root record with `decode`/`encode` and file helpers
//! - `Info`, `Frame`, `Note`, `Wall`, `Height`, `Pause` - the mandatory sections
//! - `ControllerOffsets`, `UserData` - the optional trailer
//! - `TricksReplay` - the vendor extension stored inside a UserData blob
//! - `Record` - the per-record wire contract

mod bsor;
pub(crate) mod codec;
mod cut;
mod enums;
mod events;
mod info;
mod note;
mod section;
mod tracking;
mod tricks;
mod user_data;

pub use bsor::Bsor;
pub use codec::Record;
pub use cut::Cut;
pub use enums::{EventType, SaberType, ScoringType};
pub use events::{Height, Pause, Wall};
pub use info::Info;
pub use note::{Note, NoteEvent, NoteId};
pub use section::Section;
pub use tracking::{ControllerOffsets, Frame, VrObject};
pub use tricks::{ReeFrame, Segment, TricksReplay};
pub use user_data::{UserData, UserDataPayload};
