//! Chronological score timeline.
//!
//! `calc_stats` merges note and wall events, replays them through the combo
//! multiplier and records running totals. Every series is a list of
//! `(time, value)` samples in event order, so point-in-time queries are a
//! binary search.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::scoring::{MAX_BURST_ELEMENT_SCORE, MAX_BURST_HEAD_SCORE, MAX_NOTE_SCORE};
use crate::error::{Error, Result};
use crate::replay::{Bsor, Note, NoteEvent, SaberType, ScoringType, Wall};
use crate::score::multiplier::{MultiplierCounter, max_multiplier_for};

/// What a timeline entry refers to, by index into the replay's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Note(usize),
    Wall(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEvent {
    pub time: f32,
    pub kind: EventKind,
}

impl TimelineEvent {
    /// Resolves the event against the replay it was built from.
    pub fn note<'a>(&self, replay: &'a Bsor) -> Option<&'a Note> {
        match self.kind {
            EventKind::Note(i) => replay.notes.get(i),
            EventKind::Wall(_) => None,
        }
    }

    pub fn wall<'a>(&self, replay: &'a Bsor) -> Option<&'a Wall> {
        match self.kind {
            EventKind::Wall(i) => replay.walls.get(i),
            EventKind::Note(_) => None,
        }
    }
}

/// A pair of counters, one per hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HandCounts {
    pub left: u32,
    pub right: u32,
}

impl From<[u32; 2]> for HandCounts {
    fn from(counts: [u32; 2]) -> Self {
        Self {
            left: counts[0],
            right: counts[1],
        }
    }
}

/// Time-indexed score series for one replay.
///
/// Miss counters are indexed by note color (`0` left, `1` right); bad-cut
/// counters by saber (`[left, right]`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreStats {
    pub events: Vec<TimelineEvent>,
    pub score_at_time: Vec<(f32, u64)>,
    pub max_score_at_time: Vec<(f32, u64)>,
    pub multiplier_at_time: Vec<(f32, u32)>,
    pub bomb_hit_at_time: Vec<(f32, u32)>,
    pub wall_hit_at_time: Vec<(f32, u32)>,
    pub miss_at_time: Vec<(f32, [u32; 2])>,
    pub bad_hit_at_time: Vec<(f32, [u32; 2])>,
    pub max_combo: u32,
}

/// Latest sample at or before `time`.
fn value_at<T: Copy + Default>(series: &[(f32, T)], time: f32) -> T {
    let idx = series.partition_point(|&(t, _)| t <= time);
    if idx == 0 {
        T::default()
    } else {
        series[idx - 1].1
    }
}

fn last_value<T: Copy + Default>(series: &[(f32, T)]) -> T {
    series.last().map(|&(_, v)| v).unwrap_or_default()
}

fn ratio(score: u64, max_score: u64) -> Option<f64> {
    if max_score == 0 {
        None
    } else {
        Some(score as f64 / max_score as f64)
    }
}

impl ScoreStats {
    pub fn end_score(&self) -> u64 {
        last_value(&self.score_at_time)
    }

    pub fn max_score(&self) -> u64 {
        last_value(&self.max_score_at_time)
    }

    /// Final score over final max score; `None` without any notes.
    pub fn score_percent(&self) -> Option<f64> {
        ratio(self.end_score(), self.max_score())
    }

    pub fn bomb_hits(&self) -> u32 {
        last_value(&self.bomb_hit_at_time)
    }

    pub fn wall_hits(&self) -> u32 {
        last_value(&self.wall_hit_at_time)
    }

    pub fn misses(&self) -> [u32; 2] {
        last_value(&self.miss_at_time)
    }

    pub fn bad_hits(&self) -> [u32; 2] {
        last_value(&self.bad_hit_at_time)
    }

    pub fn score_at(&self, time: f32) -> u64 {
        value_at(&self.score_at_time, time)
    }

    pub fn max_score_at(&self, time: f32) -> u64 {
        value_at(&self.max_score_at_time, time)
    }

    pub fn multiplier_at(&self, time: f32) -> u32 {
        value_at(&self.multiplier_at_time, time).max(1)
    }

    pub fn bomb_hits_at(&self, time: f32) -> u32 {
        value_at(&self.bomb_hit_at_time, time)
    }

    pub fn wall_hits_at(&self, time: f32) -> u32 {
        value_at(&self.wall_hit_at_time, time)
    }

    pub fn misses_at(&self, time: f32) -> [u32; 2] {
        value_at(&self.miss_at_time, time)
    }

    pub fn bad_cuts_at(&self, time: f32) -> [u32; 2] {
        value_at(&self.bad_hit_at_time, time)
    }

    pub fn percent_at(&self, time: f32) -> Option<f64> {
        ratio(self.score_at(time), self.max_score_at(time))
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            score: self.end_score(),
            max_score: self.max_score(),
            score_percent: self.score_percent(),
            misses: self.misses().into(),
            bad_hits: self.bad_hits().into(),
            bomb_hits: self.bomb_hits(),
            wall_hits: self.wall_hits(),
            max_combo: self.max_combo,
        }
    }
}

/// Final totals of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub score: u64,
    pub max_score: u64,
    pub score_percent: Option<f64>,
    pub misses: HandCounts,
    pub bad_hits: HandCounts,
    pub bomb_hits: u32,
    pub wall_hits: u32,
    pub max_combo: u32,
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn max_note_score(scoring_type: ScoringType) -> u64 {
    match scoring_type {
        ScoringType::BurstSliderElement => MAX_BURST_ELEMENT_SCORE,
        ScoringType::BurstSliderHead => MAX_BURST_HEAD_SCORE,
        _ => MAX_NOTE_SCORE,
    }
}

fn color_index(note: &Note) -> Result<usize> {
    match note.color_type() {
        c @ (0 | 1) => Ok(usize::from(c)),
        c => Err(Error::InvalidIndex {
            what: "color type",
            value: i32::from(c),
        }),
    }
}

fn saber_index(saber_type: i32) -> Result<usize> {
    match SaberType::from_i32(saber_type) {
        Some(SaberType::Left) => Ok(0),
        Some(SaberType::Right) => Ok(1),
        None => Err(Error::InvalidIndex {
            what: "saber type",
            value: saber_type,
        }),
    }
}

/// Merges notes and walls into one list ordered by time.
///
/// At equal timestamps notes come before walls; within each kind the
/// replay's own order is kept.
pub fn merge_events(notes: &[Note], walls: &[Wall]) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = notes
        .iter()
        .enumerate()
        .map(|(i, n)| TimelineEvent {
            time: n.event_time,
            kind: EventKind::Note(i),
        })
        .chain(walls.iter().enumerate().map(|(i, w)| TimelineEvent {
            time: w.time,
            kind: EventKind::Wall(i),
        }))
        .collect();

    // stable: notes were pushed first. -0.0 and 0.0 compare equal.
    events.sort_by(|a, b| {
        a.time
            .partial_cmp(&b.time)
            .unwrap_or_else(|| a.time.total_cmp(&b.time))
    });
    events
}

/// Replays every note and wall hit and records the running totals.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] when a missed note has a color other than
/// 0 or 1, or a bad cut names an unknown saber.
pub fn calc_stats(replay: &Bsor) -> Result<ScoreStats> {
    let mut result = ScoreStats {
        events: merge_events(&replay.notes, &replay.walls),
        ..Default::default()
    };

    let mut counter = MultiplierCounter::new();
    let mut bad = [0u32; 2];
    let mut miss = [0u32; 2];
    let mut bomb_hits = 0u32;
    let mut wall_hits = 0u32;
    let mut combo = 0u32;
    let mut note_count = 0u32;
    let mut score = 0u64;
    let mut max_score = 0u64;

    for event in &result.events {
        let time = event.time;
        let hit_score = match event.kind {
            EventKind::Note(i) => {
                let note = &replay.notes[i];

                note_count += 1;
                let tier = u64::from(max_multiplier_for(note_count));
                max_score += tier * max_note_score(note.scoring_type());
                result.max_score_at_time.push((time, max_score));

                match note.event() {
                    NoteEvent::Bad(cut) => {
                        bad[saber_index(cut.saber_type)?] += 1;
                        result.bad_hit_at_time.push((time, bad));
                    }
                    NoteEvent::Miss => {
                        miss[color_index(note)?] += 1;
                        result.miss_at_time.push((time, miss));
                    }
                    NoteEvent::Bomb => {
                        bomb_hits += 1;
                        result.bomb_hit_at_time.push((time, bomb_hits));
                    }
                    NoteEvent::Good(_) => {}
                }

                Some(u64::from(note.total_score()))
            }
            EventKind::Wall(_) => {
                wall_hits += 1;
                result.wall_hit_at_time.push((time, wall_hits));
                None
            }
        };

        match hit_score {
            Some(points) if points > 0 => {
                counter.increase();
                combo += 1;
                result.max_combo = result.max_combo.max(combo);
                score += u64::from(counter.multiplier) * points;
            }
            _ => {
                counter.decrease();
                combo = 0;
            }
        }

        result.score_at_time.push((time, score));
        result.multiplier_at_time.push((time, counter.multiplier));
    }

    debug!(
        events = result.events.len(),
        score,
        max_score,
        "Calculated score timeline"
    );
    Ok(result)
}
