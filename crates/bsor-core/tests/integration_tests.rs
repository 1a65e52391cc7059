//! Integration tests for bsor-core
//!
//! These tests verify that decoding, encoding and scoring work together on
//! whole replays.

use bsor_core::config::DecodeConfig;
use bsor_core::config::format::TRICKS_REPLAY_KEY;
use bsor_core::mock::{ReplayBuilder, perfect_cut, sample_frame, sample_info, sample_tricks_replay, vr_object};
use bsor_core::{
    Bsor, ControllerOffsets, Error, Height, Pause, Section, UserData, UserDataPayload, calc_stats,
};

fn full_replay() -> Bsor {
    let mut replay = ReplayBuilder::new()
        .info(sample_info())
        .frame(sample_frame(0.0))
        .frame(sample_frame(0.011))
        .perfect_note(1.0)
        .bad_cut(1.5, 0)
        .miss(2.0, 1)
        .bomb(2.5)
        .wall(3.0)
        .controller_offsets(ControllerOffsets {
            left: vr_object(0.1),
            right: vr_object(-0.1),
        })
        .user_data(UserData::raw("my-mod:settings", b"{\"a\":1}".to_vec()))
        .user_data(UserData::tricks(sample_tricks_replay()))
        .build();
    replay.heights.push(Height {
        height: 1.7,
        time: 0.0,
    });
    replay.pauses.push(Pause {
        duration: 12,
        time: 2.2,
    });
    replay
}

/// Byte offset where the Info section's fields start (after magic, version
/// and the Info magic byte).
const INFO_START: usize = 4 + 1 + 1;

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_full_replay_round_trip() {
        let replay = full_replay();
        let bytes = replay.to_bytes().unwrap();
        let decoded = Bsor::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, replay);
        assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_tricks_replay_survives_byte_identical() {
        let replay = full_replay();
        let bytes = replay.to_bytes().unwrap();
        let decoded = Bsor::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.tricks_replay(), Some(&sample_tricks_replay()));
        assert_eq!(decoded.user_data[1].key, TRICKS_REPLAY_KEY);
        assert_eq!(
            decoded.user_data[1].to_bytes().unwrap(),
            sample_tricks_replay().to_bytes().unwrap()
        );
    }

    #[test]
    fn test_extensions_disabled_keeps_raw_bytes() {
        let bytes = full_replay().to_bytes().unwrap();
        let config = DecodeConfig {
            parse_extensions: false,
            ..Default::default()
        };
        let decoded = Bsor::decode_with(&bytes[..], &config).unwrap();

        assert!(decoded.tricks_replay().is_none());
        assert!(matches!(
            decoded.user_data[1].payload,
            UserDataPayload::Raw(_)
        ));
        assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replay.bsor");

        let replay = full_replay();
        replay.save(&path).unwrap();
        let loaded = Bsor::open(&path).unwrap();
        assert_eq!(loaded, replay);
    }

    #[test]
    fn test_platform_edit_round_trip() {
        let mut replay = full_replay();
        replay.info.platform = "oculus".to_string();
        let decoded = Bsor::from_bytes(&replay.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.info.platform, "oculus");
        assert_eq!(decoded.notes, replay.notes);
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_perfect_note() {
        let replay = ReplayBuilder::new().perfect_note(1.0).build();
        let decoded = Bsor::from_bytes(&replay.to_bytes().unwrap()).unwrap();

        let note = &decoded.notes[0];
        assert_eq!(note.score().pre, 70);
        assert_eq!(note.score().post, 30);
        assert_eq!(note.score().acc, 15);
        assert_eq!(note.total_score(), 115);

        let stats = calc_stats(&decoded).unwrap();
        assert_eq!(stats.score_at_time.len(), 1);
        assert_eq!(stats.end_score(), 115);
        assert_eq!(stats.max_score(), 115);
        assert_eq!(stats.score_percent(), Some(1.0));
    }

    #[test]
    fn test_wrong_direction_scores_zero_and_decreases() {
        let mut cut = perfect_cut();
        cut.direction_ok = false;
        let replay = ReplayBuilder::new()
            .perfect_note(1.0)
            .perfect_note(2.0)
            .good_note(3.0, cut)
            .build();
        let decoded = Bsor::from_bytes(&replay.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.notes[2].total_score(), 0);

        let stats = calc_stats(&decoded).unwrap();
        assert_eq!(stats.multiplier_at(2.0), 2);
        assert_eq!(stats.multiplier_at(3.0), 1);
        assert_eq!(stats.score_at(3.0), stats.score_at(2.0));
    }

    #[test]
    fn test_truncated_info_names_info() {
        let bytes = ReplayBuilder::new()
            .info(sample_info())
            .build()
            .to_bytes()
            .unwrap();

        let result = Bsor::from_bytes(&bytes[..INFO_START + 20]);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                section: Section::Info,
                ..
            })
        ));
    }

    #[test]
    fn test_truncated_notes_names_notes() {
        let bytes = ReplayBuilder::new().perfect_note(1.0).build().to_bytes().unwrap();
        // the notes list is followed by three empty sections (5 bytes each)
        let result = Bsor::from_bytes(&bytes[..bytes.len() - 3 * 5 - 10]);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                section: Section::Notes,
                ..
            })
        ));
    }

    #[test]
    fn test_corrupted_root_magic() {
        let mut bytes = full_replay().to_bytes().unwrap();
        bytes[3] = 0x00;

        let err = Bsor::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::RootMagic { .. }));
        assert_eq!(err.section(), Some(Section::Header));
        assert!(err.to_string().contains("0x442d3d69"));
    }

    #[test]
    fn test_empty_input_is_truncated_header() {
        assert!(matches!(
            Bsor::from_bytes(&[]),
            Err(Error::Truncated {
                section: Section::Header,
                offset: 0
            })
        ));
    }

    #[test]
    fn test_soft_extension_failure() {
        let replay = ReplayBuilder::new()
            .user_data(UserData::raw(TRICKS_REPLAY_KEY, vec![1, 2, 3, 4, 5, 6, 7, 8]))
            .build();
        let bytes = replay.to_bytes().unwrap();

        let decoded = Bsor::from_bytes(&bytes).unwrap();
        assert!(decoded.tricks_replay().is_none());
        assert_eq!(decoded, replay);
    }

    #[test]
    fn test_tricks_payload_under_foreign_key_is_rejected() {
        let mut replay = full_replay();
        replay.user_data[1].key = "other".to_string();

        assert!(matches!(
            replay.to_bytes(),
            Err(Error::InvalidValue {
                section: Section::UserData,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_utf8_in_info() {
        let mut bytes = ReplayBuilder::new()
            .info(sample_info())
            .build()
            .to_bytes()
            .unwrap();
        // first byte of the version string
        bytes[INFO_START + 4] = 0xff;

        assert!(matches!(
            Bsor::from_bytes(&bytes),
            Err(Error::InvalidUtf8 {
                section: Section::Info,
                ..
            })
        ));
    }
}
