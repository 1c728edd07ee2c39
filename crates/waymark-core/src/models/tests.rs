#[cfg(test)]
mod model_tests {
    use crate::models::{
        Act, Dataset, GameVersion, Progress, Settings, SettingsPatch, Step, StepKind, StepView,
        ViewMode, ViewState,
    };

    fn create_test_step() -> Step {
        Step {
            id: "a1-coast-waypoint".to_string(),
            kind: StepKind::Waypoint,
            zone: "The Coast".to_string(),
            zone_id: Some("1_1_2".to_string()),
            description: "Take the waypoint near the entrance".to_string(),
            hint: Some("Waypoint is up the slope".to_string()),
            layout_tip: None,
            quest: None,
            reward: None,
            optional_note: None,
            recommended_level: Some(2),
        }
    }

    #[test]
    fn test_step_kind_serializes_snake_case() {
        let json = serde_json::to_string(&StepKind::KillBoss).unwrap();
        assert_eq!(json, "\"kill_boss\"");

        let parsed: StepKind = serde_json::from_str("\"npc_quest\"").unwrap();
        assert_eq!(parsed, StepKind::NpcQuest);
    }

    #[test]
    fn test_step_kind_as_str_matches_serde_names() {
        for kind in [
            StepKind::KillBoss,
            StepKind::Town,
            StepKind::NpcQuest,
            StepKind::Navigation,
            StepKind::Waypoint,
            StepKind::Quest,
            StepKind::Optional,
            StepKind::Passive,
            StepKind::Trial,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<StepKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_step_kind_from_str_rejects_unknown() {
        assert!("boss".parse::<StepKind>().is_err());
    }

    #[test]
    fn test_step_optional_fields_default_to_none() {
        let json = r#"{
            "id": "s1",
            "kind": "navigation",
            "zone": "The Coast",
            "description": "Go through"
        }"#;

        let step: Step = serde_json::from_str(json).unwrap();
        assert_eq!(step.zone_id, None);
        assert_eq!(step.hint, None);
        assert_eq!(step.reward, None);
        assert_eq!(step.recommended_level, None);
    }

    #[test]
    fn test_step_skips_absent_fields_when_serialized() {
        let mut step = create_test_step();
        step.hint = None;

        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("\"hint\""));
        assert!(!json.contains("\"reward\""));
        assert!(json.contains("\"zone_id\""));
    }

    #[test]
    fn test_dataset_act_lookup() {
        let dataset = Dataset {
            acts: vec![
                Act {
                    act_number: 1,
                    act_name: "The Shore".to_string(),
                    recommended_end_level: Some(13),
                    steps: vec![create_test_step()],
                },
                Act {
                    act_number: 2,
                    act_name: "The Forest".to_string(),
                    recommended_end_level: None,
                    steps: vec![],
                },
            ],
        };

        assert_eq!(dataset.act(2).map(|a| a.act_name.as_str()), Some("The Forest"));
        assert!(dataset.act(3).is_none());
    }

    #[test]
    fn test_game_version_parsing_and_keys() {
        assert_eq!("poe1".parse::<GameVersion>().unwrap(), GameVersion::Poe1);
        assert_eq!("POE2".parse::<GameVersion>().unwrap(), GameVersion::Poe2);
        assert_eq!("1".parse::<GameVersion>().unwrap(), GameVersion::Poe1);
        assert_eq!("2".parse::<GameVersion>().unwrap(), GameVersion::Poe2);
        assert!("poe3".parse::<GameVersion>().is_err());

        assert_eq!(GameVersion::Poe1.as_str(), "poe1");
        assert_eq!(format!("{}", GameVersion::Poe2), "poe2");
        assert_eq!(GameVersion::Poe2.title(), "Path of Exile 2");
    }

    #[test]
    fn test_game_version_default_is_poe2() {
        assert_eq!(GameVersion::default(), GameVersion::Poe2);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.visible_steps, 5);
        assert!(settings.show_hints);
        assert!(settings.show_optional);
        assert_eq!(settings.current_act, 1);
        assert_eq!(settings.game_version, GameVersion::Poe2);
    }

    #[test]
    fn test_settings_missing_fields_deserialize_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let partial: Settings = serde_json::from_str(r#"{"visible_steps": 8}"#).unwrap();
        assert_eq!(partial.visible_steps, 8);
        assert!(partial.show_hints);
        assert_eq!(partial.game_version, GameVersion::Poe2);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            game_version: GameVersion::Poe1,
            current_act: 3,
            show_optional: false,
            ..Settings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"game_version\":\"poe1\""));

        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_settings_patch_applies_only_set_fields() {
        let mut settings = Settings::default();

        let empty = SettingsPatch::default();
        assert!(empty.is_empty());
        empty.apply(&mut settings);
        assert_eq!(settings, Settings::default());

        let patch = SettingsPatch {
            visible_steps: Some(9),
            show_hints: None,
            show_optional: Some(false),
        };
        assert!(!patch.is_empty());
        patch.apply(&mut settings);

        assert_eq!(settings.visible_steps, 9);
        assert!(settings.show_hints);
        assert!(!settings.show_optional);
        assert_eq!(settings.current_act, 1);
    }

    #[test]
    fn test_view_state_default() {
        let state = ViewState::default();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.mode, ViewMode::RemainingOnly);
    }

    #[test]
    fn test_step_view_pairs_step_with_checked_flag() {
        let view = StepView::new(create_test_step(), true);
        assert!(view.checked);
        assert_eq!(view.step.id, "a1-coast-waypoint");
    }

    #[test]
    fn test_progress_percentage_rounds() {
        assert_eq!(Progress { completed: 0, total: 0 }.percentage(), 0);
        assert_eq!(Progress { completed: 1, total: 3 }.percentage(), 33);
        assert_eq!(Progress { completed: 2, total: 3 }.percentage(), 67);
        assert_eq!(Progress { completed: 5, total: 5 }.percentage(), 100);
        assert_eq!(Progress { completed: 1, total: 8 }.percentage(), 13);
    }
}
