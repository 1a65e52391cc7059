use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Note category selecting the score formula.
///
/// Stored as the leading digit of a packed note id (the game's own value
/// plus two). Codes 0 and 3 are both plain notes and share the label
/// "Normal"; they stay distinct so a note id re-packs unchanged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum ScoringType {
    #[strum(serialize = "Normal")]
    NormalLegacy = 0,
    Ignore = 1,
    NoScore = 2,
    #[default]
    Normal = 3,
    SliderHead = 4,
    SliderTail = 5,
    BurstSliderHead = 6,
    BurstSliderElement = 7,
}

impl ScoringType {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ScoringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of a note as stored on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(i32)]
pub enum EventType {
    #[default]
    #[strum(serialize = "cut")]
    Good = 0,
    #[strum(serialize = "badcut")]
    Bad = 1,
    #[strum(serialize = "miss")]
    Miss = 2,
    #[strum(serialize = "bomb")]
    Bomb = 3,
}

impl EventType {
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Good and bad cuts carry cut geometry; misses and bombs do not.
    pub fn has_cut(&self) -> bool {
        matches!(self, EventType::Good | EventType::Bad)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRepr, IntoStaticStr,
)]
#[repr(i32)]
pub enum SaberType {
    #[strum(serialize = "right")]
    Right = 0,
    #[strum(serialize = "left")]
    Left = 1,
}

impl SaberType {
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SaberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_type_labels() {
        assert_eq!(ScoringType::NormalLegacy.label(), "Normal");
        assert_eq!(ScoringType::Normal.label(), "Normal");
        assert_eq!(ScoringType::BurstSliderElement.label(), "BurstSliderElement");
        assert_ne!(ScoringType::NormalLegacy, ScoringType::Normal);
    }

    #[test]
    fn test_scoring_type_from_u8() {
        assert_eq!(ScoringType::from_u8(0), Some(ScoringType::NormalLegacy));
        assert_eq!(ScoringType::from_u8(7), Some(ScoringType::BurstSliderElement));
        assert_eq!(ScoringType::from_u8(8), None);
    }

    #[test]
    fn test_event_type_labels() {
        assert_eq!(EventType::Good.label(), "cut");
        assert_eq!(EventType::Bad.label(), "badcut");
        assert_eq!(EventType::Miss.to_string(), "miss");
        assert_eq!(EventType::from_i32(3), Some(EventType::Bomb));
        assert_eq!(EventType::from_i32(4), None);
    }

    #[test]
    fn test_event_type_has_cut() {
        assert!(EventType::Good.has_cut());
        assert!(EventType::Bad.has_cut());
        assert!(!EventType::Miss.has_cut());
        assert!(!EventType::Bomb.has_cut());
    }

    #[test]
    fn test_saber_type() {
        assert_eq!(SaberType::from_i32(0), Some(SaberType::Right));
        assert_eq!(SaberType::from_i32(1), Some(SaberType::Left));
        assert_eq!(SaberType::from_i32(2), None);
        assert_eq!(SaberType::Left.label(), "left");
    }
}
