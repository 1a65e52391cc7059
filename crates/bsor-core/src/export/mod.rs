//! Human-readable views of a replay.
//!
//! The JSON view is one-way: codes become labels and vectors become named
//! fields, so it is not meant to be parsed back into a replay.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use serde_json::{Value as JsonValue, json};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::replay::{
    Bsor, ControllerOffsets, Cut, Frame, Height, Info, Note, Pause, ReeFrame, Segment,
    TricksReplay, UserData, UserDataPayload, VrObject, Wall,
};
use crate::score::{AccuracyGrid, StatsSummary};

/// Presentation view of a record.
pub trait ToView {
    fn to_view(&self) -> JsonValue;
}

impl<T: ToView> ToView for [T] {
    fn to_view(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToView::to_view).collect())
    }
}

fn vec3_view(v: &[f32; 3]) -> JsonValue {
    json!({ "x": v[0], "y": v[1], "z": v[2] })
}

impl ToView for Info {
    fn to_view(&self) -> JsonValue {
        json!({
            "version": self.version,
            "gameVersion": self.game_version,
            "timestamp": self.timestamp,
            "playerId": self.player_id,
            "playerName": self.player_name,
            "platform": self.platform,
            "trackingSystem": self.tracking_system,
            "hmd": self.hmd,
            "controller": self.controller,
            "songHash": self.song_hash,
            "songName": self.song_name,
            "mapper": self.mapper,
            "difficulty": self.difficulty,
            "score": self.score,
            "mode": self.mode,
            "environment": self.environment,
            "modifiers": self.modifiers,
            "jumpDistance": self.jump_distance,
            "leftHanded": self.left_handed,
            "height": self.height,
            "startTime": self.start_time,
            "failTime": self.fail_time,
            "speed": self.speed,
        })
    }
}

impl ToView for VrObject {
    fn to_view(&self) -> JsonValue {
        json!({
            "position": { "x": self.x, "y": self.y, "z": self.z },
            "rotation": { "x": self.x_rot, "y": self.y_rot, "z": self.z_rot, "w": self.w_rot },
        })
    }
}

impl ToView for Frame {
    fn to_view(&self) -> JsonValue {
        json!({
            "time": self.time,
            "fps": self.fps,
            "head": self.head.to_view(),
            "left_hand": self.left_hand.to_view(),
            "right_hand": self.right_hand.to_view(),
        })
    }
}

impl ToView for Cut {
    fn to_view(&self) -> JsonValue {
        let saber = self.saber().map_or("unknown", |s| s.label());
        json!({
            "speedOK": self.speed_ok,
            "directionOk": self.direction_ok,
            "saberTypeOk": self.saber_type_ok,
            "wasCutTooSoon": self.was_cut_too_soon,
            "saberSpeed": self.saber_speed,
            "saberDirection": vec3_view(&self.saber_direction),
            "saberType": saber,
            "timeDeviation": self.time_deviation,
            "cutDeviation": self.cut_deviation,
            "cutPoint": vec3_view(&self.cut_point),
            "cutNormal": vec3_view(&self.cut_normal),
            "cutDistanceToCenter": self.cut_distance_to_center,
            "cutAngle": self.cut_angle,
            "beforeCutRating": self.before_cut_rating,
            "afterCutRating": self.after_cut_rating,
        })
    }
}

impl ToView for Note {
    fn to_view(&self) -> JsonValue {
        let score = self.score();
        let mut view = json!({
            "note_id": self.note_id(),
            "scoringType": self.scoring_type().label(),
            "lineIndex": self.line_index(),
            "noteLineLayer": self.note_line_layer(),
            "colorType": self.color_type(),
            "cutDirection": self.cut_direction(),
            "event_time": self.event_time,
            "spawn_time": self.spawn_time,
            "event_type": self.event_type().label(),
            "pre_score": score.pre,
            "post_score": score.post,
            "acc_score": score.acc,
            "score": score.total(),
        });
        if let Some(cut) = self.cut() {
            view["cut"] = cut.to_view();
        }
        view
    }
}

impl ToView for Wall {
    fn to_view(&self) -> JsonValue {
        json!({
            "id": self.id,
            "energy": self.energy,
            "time": self.time,
            "spawnTime": self.spawn_time,
        })
    }
}

impl ToView for Height {
    fn to_view(&self) -> JsonValue {
        json!({ "height": self.height, "time": self.time })
    }
}

impl ToView for Pause {
    fn to_view(&self) -> JsonValue {
        json!({ "duration": self.duration, "time": self.time })
    }
}

impl ToView for ControllerOffsets {
    fn to_view(&self) -> JsonValue {
        json!({
            "left": self.left.to_view(),
            "right": self.right.to_view(),
        })
    }
}

impl ToView for ReeFrame {
    fn to_view(&self) -> JsonValue {
        json!({
            "song_time": self.song_time,
            "position": self.position.to_view(),
        })
    }
}

impl ToView for Segment {
    fn to_view(&self) -> JsonValue {
        self.frames.to_view()
    }
}

impl ToView for TricksReplay {
    fn to_view(&self) -> JsonValue {
        json!({
            "version": self.version,
            "left": self.left.to_view(),
            "right": self.right.to_view(),
        })
    }
}

impl ToView for UserData {
    fn to_view(&self) -> JsonValue {
        let data = match &self.payload {
            UserDataPayload::Raw(bytes) => json!(bytes),
            UserDataPayload::Tricks(replay) => replay.to_view(),
        };
        json!({ "key": self.key, "bytes": data })
    }
}

impl ToView for StatsSummary {
    fn to_view(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

impl ToView for AccuracyGrid {
    fn to_view(&self) -> JsonValue {
        json!(self.rows())
    }
}

/// Builds the JSON view of a whole replay.
///
/// Frames are the bulk of a replay and are only included when
/// `config.include_frames` is set.
pub fn replay_view(replay: &Bsor, config: &ExportConfig) -> JsonValue {
    let mut view = json!({
        "file_version": replay.file_version,
        "info": replay.info.to_view(),
        "notes": replay.notes.to_view(),
        "walls": replay.walls.to_view(),
        "heights": replay.heights.to_view(),
        "pauses": replay.pauses.to_view(),
        "controller_offsets": replay.controller_offsets.as_ref().map(ToView::to_view),
        "user_data": replay.user_data.to_view(),
    });
    if config.include_frames {
        view["frames"] = replay.frames.to_view();
    } else {
        view["frame_count"] = json!(replay.frames.len());
    }
    view
}

pub fn replay_to_json(replay: &Bsor, config: &ExportConfig) -> Result<String> {
    let view = replay_view(replay, config);
    let json = if config.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(json)
}

/// Writes the JSON view of a replay to a file.
pub fn export_replay_json<P: AsRef<Path>>(
    path: P,
    replay: &Bsor,
    config: &ExportConfig,
) -> Result<()> {
    let json = replay_to_json(replay, config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ReplayBuilder, perfect_cut, sample_info, sample_tricks_replay, vr_object};
    use crate::replay::NoteEvent;

    #[test]
    fn test_vr_object_view() {
        let view = vr_object(1.0).to_view();
        assert_eq!(view["position"]["x"], 1.0);
        assert_eq!(view["position"]["y"], 2.0);
        assert_eq!(view["rotation"]["w"], 1.0);
    }

    #[test]
    fn test_cut_view_uses_labels() {
        let view = perfect_cut().to_view();
        assert_eq!(view["saberType"], "left");
        assert_eq!(view["cutNormal"]["x"], 1.0);

        let right = Cut {
            saber_type: 0,
            ..perfect_cut()
        };
        assert_eq!(right.to_view()["saberType"], "right");
    }

    #[test]
    fn test_note_view() {
        let note = Note::new(31203, 1.0, 0.5, NoteEvent::Good(perfect_cut())).unwrap();
        let view = note.to_view();
        assert_eq!(view["scoringType"], "Normal");
        assert_eq!(view["event_type"], "cut");
        assert_eq!(view["score"], 115);
        assert_eq!(view["lineIndex"], 1);
        assert!(view["cut"].is_object());

        let miss = Note::new(1203, 1.0, 0.5, NoteEvent::Miss).unwrap();
        let view = miss.to_view();
        assert_eq!(view["scoringType"], "Normal");
        assert_eq!(view["event_type"], "miss");
        assert!(view.get("cut").is_none());
    }

    #[test]
    fn test_user_data_views() {
        let raw = UserData::raw("k", vec![1, 2]);
        assert_eq!(raw.to_view()["bytes"], json!([1, 2]));

        let tricks = UserData::tricks(sample_tricks_replay());
        let view = tricks.to_view();
        assert_eq!(view["key"], "reesabers:tricks-replay");
        assert_eq!(view["bytes"]["left"].as_array().unwrap().len(), 2);
        assert_eq!(view["bytes"]["right"][0].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_replay_view_frames_are_optional() {
        let replay = ReplayBuilder::new()
            .info(sample_info())
            .frame(crate::mock::sample_frame(0.0))
            .frame(crate::mock::sample_frame(0.1))
            .perfect_note(1.0)
            .build();

        let view = replay_view(&replay, &ExportConfig::default());
        assert!(view.get("frames").is_none());
        assert_eq!(view["frame_count"], 2);
        assert_eq!(view["info"]["playerName"], "Tester");
        assert!(view["controller_offsets"].is_null());

        let config = ExportConfig {
            include_frames: true,
            pretty: true,
        };
        let json = replay_to_json(&replay, &config).unwrap();
        assert!(json.contains('\n'));
        let parsed: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["frames"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_export_replay_json_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replay.json");
        let replay = ReplayBuilder::new().perfect_note(1.0).build();

        export_replay_json(&path, &replay, &ExportConfig::default()).unwrap();
        let parsed: JsonValue = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["notes"][0]["score"], 115);
    }
}
