//! Scoring engine.
//!
//! This module contains:
//! - `calc_note_score` - raw pre/post/accuracy points of a single cut
//! - `MultiplierCounter` - combo multiplier state machine
//! - `calc_stats`, `ScoreStats` - the chronological score timeline
//! - `AccuracyGrid` - average cut score per grid lane

mod accuracy;
mod multiplier;
mod note_score;
mod stats;

pub use accuracy::*;
pub use multiplier::*;
pub use note_score::*;
pub use stats::*;
