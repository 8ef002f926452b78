//! Settings Integration Tests
//!
//! Persisted settings survive a reopen and drive the parser configuration.

use tempfile::tempdir;

use vidquiz::{parse_with_config, ConfigService, Dialect, SettingsUpdate};

#[test]
fn test_settings_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vidquiz").join("settings.json");

    let mut service = ConfigService::open(&path).unwrap();
    service
        .update_config(SettingsUpdate {
            marker_question_limit: Some(3),
            prompt_dialect: Some(Dialect::BoldField),
            ..Default::default()
        })
        .unwrap();

    let reopened = ConfigService::open(&path).unwrap();
    assert_eq!(reopened.get_config().parser.marker_question_limit, 3);
    assert_eq!(reopened.get_config().prompt_dialect, Dialect::BoldField);
}

#[test]
fn test_persisted_limit_caps_marker_questions() {
    let dir = tempdir().unwrap();
    let mut service = ConfigService::open(dir.path().join("settings.json")).unwrap();
    service
        .update_config(SettingsUpdate {
            marker_question_limit: Some(2),
            ..Default::default()
        })
        .unwrap();

    let text = "1. One?\nAnswer: 1\n2. Two?\nAnswer: 2\n3. Three?\nAnswer: 3";
    let questions = parse_with_config(text, &service.get_config().parser);

    assert_eq!(questions.len(), 2);
}

#[test]
fn test_invalid_update_is_not_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut service = ConfigService::open(&path).unwrap();

    let result = service.update_config(SettingsUpdate {
        summary_bullet_count: Some(0),
        ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(service.get_config().summary_bullet_count, 3);
    let reopened = ConfigService::open(&path).unwrap();
    assert_eq!(reopened.get_config().summary_bullet_count, 3);
}
