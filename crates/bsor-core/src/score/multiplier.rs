use serde::Serialize;

use crate::config::scoring::{MAX_MULTIPLIER, MAX_TIER_THRESHOLDS};

/// Combo multiplier state.
///
/// The multiplier starts at 1 and doubles every time `progress` fills up to
/// `progress_cap`, topping out at 8. Any failure halves it and clears the
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MultiplierCounter {
    pub multiplier: u32,
    pub progress: u32,
    pub progress_cap: u32,
}

impl Default for MultiplierCounter {
    fn default() -> Self {
        Self {
            multiplier: 1,
            progress: 0,
            progress_cap: 2,
        }
    }
}

impl MultiplierCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a successful hit.
    pub fn increase(&mut self) {
        if self.multiplier >= MAX_MULTIPLIER {
            return;
        }
        if self.progress < self.progress_cap {
            self.progress += 1;
        }
        if self.progress >= self.progress_cap {
            self.multiplier *= 2;
            self.progress = 0;
            self.progress_cap = self.multiplier * 2;
        }
    }

    /// Registers a miss, bad cut, zero-score cut or wall hit.
    pub fn decrease(&mut self) {
        self.progress = 0;
        self.multiplier = (self.multiplier / 2).max(1);
        self.progress_cap = self.multiplier * 2;
    }
}

/// Multiplier a perfect player would have on the `note_count`-th note.
pub fn max_multiplier_for(note_count: u32) -> u32 {
    match MAX_TIER_THRESHOLDS.iter().filter(|&&t| note_count > t).count() {
        0 => 1,
        1 => 2,
        2 => 4,
        _ => 8,
    }
}
