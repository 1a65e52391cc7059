//! Replay fixtures for tests
//!
//! Provides sample records and a fluent builder for assembling replays
//! without hand-encoding bytes.

use crate::replay::{
    Bsor, ControllerOffsets, Cut, Frame, Info, Note, NoteEvent, NoteId, ReeFrame, ScoringType,
    Segment, TricksReplay, UserData, VrObject, Wall,
};

/// A plain note in the second lane of the middle row.
pub const NORMAL_NOTE: NoteId = NoteId {
    scoring_type: ScoringType::Normal,
    line_index: 1,
    note_line_layer: 1,
    color_type: 0,
    cut_direction: 1,
};

/// A pose with every component derived from `seed`.
pub fn vr_object(seed: f32) -> VrObject {
    VrObject {
        x: seed,
        y: seed + 1.0,
        z: seed - 1.0,
        x_rot: 0.0,
        y_rot: seed / 10.0,
        z_rot: 0.0,
        w_rot: 1.0,
    }
}

/// A cut that scores 70/30/15.
pub fn perfect_cut() -> Cut {
    Cut {
        speed_ok: true,
        direction_ok: true,
        saber_type_ok: true,
        was_cut_too_soon: false,
        saber_speed: 4.5,
        saber_direction: [0.0, -1.0, 0.0],
        saber_type: 1,
        time_deviation: 0.0,
        cut_deviation: 0.0,
        cut_point: [0.0, 1.0, 0.5],
        cut_normal: [1.0, 0.0, 0.0],
        cut_distance_to_center: 0.0,
        cut_angle: 120.0,
        before_cut_rating: 1.0,
        after_cut_rating: 1.0,
    }
}

pub fn sample_info() -> Info {
    Info {
        version: "0.9.31".to_string(),
        game_version: "1.34.2".to_string(),
        timestamp: "1700000000".to_string(),
        player_id: "76561198000000000".to_string(),
        player_name: "Tester".to_string(),
        platform: "steam".to_string(),
        tracking_system: "Oculus".to_string(),
        hmd: "Quest 2".to_string(),
        controller: "Touch".to_string(),
        song_hash: "09FD6D30C55F6D721AB75A10FD412A1A1037F9A9".to_string(),
        song_name: "Ｓｏｎｇ ♪".to_string(),
        mapper: "Mapper".to_string(),
        difficulty: "ExpertPlus".to_string(),
        score: 123456,
        mode: "Standard".to_string(),
        environment: "DefaultEnvironment".to_string(),
        modifiers: "FS,GN".to_string(),
        jump_distance: 18.5,
        left_handed: false,
        height: 1.75,
        start_time: 0.0,
        fail_time: 0.0,
        speed: 0.0,
    }
}

pub fn sample_frame(time: f32) -> Frame {
    Frame {
        time,
        fps: 90,
        head: vr_object(time),
        left_hand: vr_object(time + 0.25),
        right_hand: vr_object(time + 0.5),
    }
}

/// Two left segments and one right segment.
pub fn sample_tricks_replay() -> TricksReplay {
    let segment = |start: f32, len: usize| Segment {
        frames: (0..len)
            .map(|i| {
                let song_time = start + i as f32 * 0.1;
                ReeFrame {
                    song_time,
                    position: vr_object(song_time),
                }
            })
            .collect(),
    };

    TricksReplay {
        version: 1,
        left: vec![segment(1.0, 3), segment(5.0, 2)],
        right: vec![segment(2.0, 4)],
    }
}

/// Builder for assembling replays in tests
///
/// Notes and walls are appended in call order, so tests control the list
/// order independently of the timestamps.
#[derive(Debug, Clone, Default)]
pub struct ReplayBuilder {
    replay: Bsor,
}

impl ReplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(mut self, info: Info) -> Self {
        self.replay.info = info;
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.replay.frames.push(frame);
        self
    }

    /// Pushes a note with the given id digits as-is.
    pub fn note_with_id(mut self, id: NoteId, time: f32, event: NoteEvent) -> Self {
        self.replay
            .notes
            .push(Note::build(id.pack(), id, time, time - 0.5, event));
        self
    }

    pub fn good_note(self, time: f32, cut: Cut) -> Self {
        self.note_with_id(NORMAL_NOTE, time, NoteEvent::Good(cut))
    }

    pub fn perfect_note(self, time: f32) -> Self {
        self.good_note(time, perfect_cut())
    }

    /// A bad cut made with the given saber (`0` right, `1` left).
    pub fn bad_cut(self, time: f32, saber_type: i32) -> Self {
        let cut = Cut {
            saber_type,
            saber_type_ok: false,
            ..perfect_cut()
        };
        self.note_with_id(NORMAL_NOTE, time, NoteEvent::Bad(cut))
    }

    pub fn miss(self, time: f32, color_type: u8) -> Self {
        let id = NoteId {
            color_type,
            ..NORMAL_NOTE
        };
        self.note_with_id(id, time, NoteEvent::Miss)
    }

    pub fn bomb(self, time: f32) -> Self {
        let id = NoteId {
            scoring_type: ScoringType::NoScore,
            cut_direction: 0,
            ..NORMAL_NOTE
        };
        self.note_with_id(id, time, NoteEvent::Bomb)
    }

    pub fn wall(mut self, time: f32) -> Self {
        let id = self.replay.walls.len() as i32;
        self.replay.walls.push(Wall {
            id,
            energy: 0.8,
            time,
            spawn_time: time - 1.0,
        });
        self
    }

    pub fn controller_offsets(mut self, offsets: ControllerOffsets) -> Self {
        self.replay.controller_offsets = Some(offsets);
        self
    }

    /// Appends user data, adding default controller offsets if none are set.
    pub fn user_data(mut self, entry: UserData) -> Self {
        self.replay.controller_offsets.get_or_insert_with(ControllerOffsets::default);
        self.replay.user_data.push(entry);
        self
    }

    pub fn build(self) -> Bsor {
        self.replay
    }
}
