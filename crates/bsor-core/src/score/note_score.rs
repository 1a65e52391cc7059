use serde::{Deserialize, Serialize};

use crate::config::scoring::{
    BURST_ELEMENT_CUT_DISTANCE, CUT_DISTANCE_RANGE, MAX_AFTER_CUT, MAX_BEFORE_CUT,
    MAX_CUT_DISTANCE,
};
use crate::replay::{Cut, ScoringType};

/// Raw score components of a single cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteScore {
    /// Pre-swing points (0-70).
    pub pre: u32,
    /// Post-swing points (0-30).
    pub post: u32,
    /// Accuracy points (0-15, or 20 for burst slider elements).
    pub acc: u32,
}

impl NoteScore {
    pub const ZERO: NoteScore = NoteScore {
        pre: 0,
        post: 0,
        acc: 0,
    };

    pub fn total(&self) -> u32 {
        self.pre + self.post + self.acc
    }
}

/// Rounds with halves going up: a fractional part below 0.5 truncates,
/// anything else rounds to the next integer. Not banker's rounding.
pub fn round_half_up(value: f64) -> i64 {
    let fraction = value.rem_euclid(1.0);
    if fraction < 0.5 {
        value as i64
    } else {
        (value + 1.0) as i64
    }
}

fn rating_points(rating: f32, max: u32) -> u32 {
    round_half_up(f64::from(max) * f64::from(rating)).clamp(0, i64::from(max)) as u32
}

/// Computes the raw score components of a cut for the given scoring type.
///
/// A cut with the wrong speed, direction or saber scores nothing regardless
/// of its geometry.
pub fn calc_note_score(cut: &Cut, scoring_type: ScoringType) -> NoteScore {
    if !cut.is_valid() {
        return NoteScore::ZERO;
    }

    let pre = match scoring_type {
        ScoringType::BurstSliderElement => 0,
        ScoringType::SliderTail => MAX_BEFORE_CUT,
        _ => rating_points(cut.before_cut_rating, MAX_BEFORE_CUT),
    };

    let post = match scoring_type {
        ScoringType::BurstSliderElement | ScoringType::BurstSliderHead => 0,
        ScoringType::SliderHead => MAX_AFTER_CUT,
        _ => rating_points(cut.after_cut_rating, MAX_AFTER_CUT),
    };

    let acc = match scoring_type {
        ScoringType::BurstSliderElement => BURST_ELEMENT_CUT_DISTANCE,
        _ => {
            let distance =
                (f64::from(cut.cut_distance_to_center) / CUT_DISTANCE_RANGE).clamp(0.0, 1.0);
            round_half_up(f64::from(MAX_CUT_DISTANCE) * (1.0 - distance)).max(0) as u32
        }
    };

    NoteScore { pre, post, acc }
}
