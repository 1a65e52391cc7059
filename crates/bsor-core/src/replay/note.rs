//! Note events and the packed note id.

use std::io::{Read, Write};

use crate::bytes::{ReplayReader, ReplayWriter};
use crate::error::{Error, Result};
use crate::replay::{Cut, EventType, Record, ScoringType, Section};
use crate::score::{NoteScore, calc_note_score};

/// The five decimal digits packed into a note id.
///
/// `note_id = scoringType*10000 + lineIndex*1000 + noteLineLayer*100
/// + colorType*10 + cutDirection`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId {
    pub scoring_type: ScoringType,
    pub line_index: u8,
    pub note_line_layer: u8,
    pub color_type: u8,
    pub cut_direction: u8,
}

/// Splits off the least significant decimal digit.
fn take_digit(x: &mut i32) -> u8 {
    let digit = *x % 10;
    *x = (*x - digit) / 10;
    digit as u8
}

impl NoteId {
    /// Decomposes a packed note id, least significant digit first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for negative ids and scoring-type
    /// digits outside 0-7.
    pub fn unpack(note_id: i32) -> Result<Self> {
        if note_id < 0 {
            return Err(Error::InvalidValue {
                section: Section::Notes,
                message: format!("negative note id {}", note_id),
            });
        }

        let mut x = note_id;
        let cut_direction = take_digit(&mut x);
        let color_type = take_digit(&mut x);
        let note_line_layer = take_digit(&mut x);
        let line_index = take_digit(&mut x);
        let scoring_digit = take_digit(&mut x);

        let scoring_type =
            ScoringType::from_u8(scoring_digit).ok_or_else(|| Error::InvalidValue {
                section: Section::Notes,
                message: format!(
                    "unknown scoring type {} in note id {}",
                    scoring_digit, note_id
                ),
            })?;

        Ok(Self {
            scoring_type,
            line_index,
            note_line_layer,
            color_type,
            cut_direction,
        })
    }

    /// Packs the digits back into an id. Only exact for digits below 10; see
    /// [`NoteId::check_digits`].
    pub fn pack(&self) -> i32 {
        i32::from(self.scoring_type as u8) * 10000
            + i32::from(self.line_index) * 1000
            + i32::from(self.note_line_layer) * 100
            + i32::from(self.color_type) * 10
            + i32::from(self.cut_direction)
    }

    /// Fails when a digit field would spill into its neighbour on packing.
    pub fn check_digits(&self) -> Result<()> {
        let digits = [
            ("line index", self.line_index),
            ("note line layer", self.note_line_layer),
            ("color type", self.color_type),
            ("cut direction", self.cut_direction),
        ];
        match digits.iter().find(|(_, digit)| *digit > 9) {
            Some((name, digit)) => Err(Error::InvalidValue {
                section: Section::Notes,
                message: format!("{} {} does not fit in one note id digit", name, digit),
            }),
            None => Ok(()),
        }
    }
}

/// What happened to a note. Only cuts carry geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteEvent {
    Good(Cut),
    Bad(Cut),
    Miss,
    Bomb,
}

impl NoteEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            NoteEvent::Good(_) => EventType::Good,
            NoteEvent::Bad(_) => EventType::Bad,
            NoteEvent::Miss => EventType::Miss,
            NoteEvent::Bomb => EventType::Bomb,
        }
    }

    pub fn cut(&self) -> Option<&Cut> {
        match self {
            NoteEvent::Good(cut) | NoteEvent::Bad(cut) => Some(cut),
            NoteEvent::Miss | NoteEvent::Bomb => None,
        }
    }
}

/// A single note outcome.
///
/// The id and event are fixed at construction so the decomposed id and the
/// derived score always agree with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    note_id: i32,
    id: NoteId,
    pub event_time: f32,
    pub spawn_time: f32,
    event: NoteEvent,
    score: NoteScore,
}

impl Note {
    /// Creates a note from its packed id, computing the derived score.
    pub fn new(note_id: i32, event_time: f32, spawn_time: f32, event: NoteEvent) -> Result<Self> {
        let id = NoteId::unpack(note_id)?;
        Ok(Self::build(note_id, id, event_time, spawn_time, event))
    }

    /// Creates a note from decomposed id digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when a digit field is 10 or more.
    pub fn from_id(
        id: NoteId,
        event_time: f32,
        spawn_time: f32,
        event: NoteEvent,
    ) -> Result<Self> {
        id.check_digits()?;
        Ok(Self::build(id.pack(), id, event_time, spawn_time, event))
    }

    pub(crate) fn build(
        note_id: i32,
        id: NoteId,
        event_time: f32,
        spawn_time: f32,
        event: NoteEvent,
    ) -> Self {
        let score = match event.cut() {
            Some(cut) => calc_note_score(cut, id.scoring_type),
            None => NoteScore::ZERO,
        };
        Self {
            note_id,
            id,
            event_time,
            spawn_time,
            event,
            score,
        }
    }

    /// The packed id exactly as stored.
    pub fn note_id(&self) -> i32 {
        self.note_id
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn scoring_type(&self) -> ScoringType {
        self.id.scoring_type
    }

    pub fn line_index(&self) -> u8 {
        self.id.line_index
    }

    pub fn note_line_layer(&self) -> u8 {
        self.id.note_line_layer
    }

    pub fn color_type(&self) -> u8 {
        self.id.color_type
    }

    pub fn cut_direction(&self) -> u8 {
        self.id.cut_direction
    }

    pub fn event(&self) -> &NoteEvent {
        &self.event
    }

    pub fn event_type(&self) -> EventType {
        self.event.event_type()
    }

    pub fn cut(&self) -> Option<&Cut> {
        self.event.cut()
    }

    /// Raw score components; zero for misses and bombs.
    pub fn score(&self) -> NoteScore {
        self.score
    }

    pub fn total_score(&self) -> u32 {
        self.score.total()
    }
}

impl Record for Note {
    fn decode<R: Read>(reader: &mut ReplayReader<R>) -> Result<Self> {
        let note_id = reader.read_i32()?;
        let event_time = reader.read_f32()?;
        let spawn_time = reader.read_f32()?;
        let code = reader.read_i32()?;

        let event_type = EventType::from_i32(code)
            .ok_or_else(|| reader.invalid_value(format!("unknown note event type {}", code)))?;
        let event = match event_type {
            EventType::Good => NoteEvent::Good(Cut::decode(reader)?),
            EventType::Bad => NoteEvent::Bad(Cut::decode(reader)?),
            EventType::Miss => NoteEvent::Miss,
            EventType::Bomb => NoteEvent::Bomb,
        };

        Note::new(note_id, event_time, spawn_time, event)
    }

    fn encode<W: Write>(&self, writer: &mut ReplayWriter<W>) -> Result<()> {
        writer.write_i32(self.note_id)?;
        writer.write_f32(self.event_time)?;
        writer.write_f32(self.spawn_time)?;
        writer.write_i32(self.event_type() as i32)?;
        match self.cut() {
            Some(cut) => cut.encode(writer),
            None => Ok(()),
        }
    }
}
