pub mod bytes;
pub mod config;
pub mod error;
pub mod export;
#[doc(hidden)]
pub mod mock;
pub mod replay;
pub mod score;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{ToView, replay_to_json};
pub use replay::{
    Bsor, ControllerOffsets, Cut, EventType, Frame, Height, Info, Note, NoteEvent, NoteId, Pause,
    Record, SaberType, ScoringType, Section, TricksReplay, UserData, UserDataPayload, VrObject,
    Wall,
};
pub use score::{AccuracyGrid, NoteScore, ScoreStats, StatsSummary, calc_note_score, calc_stats};
