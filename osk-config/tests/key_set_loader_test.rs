mod common;

use osk_config::{ConfigError, DocumentFormat, KeySetLoader};
use osk_types::key_type::KeyVariation;

use crate::common::{QWERTY_JSON, QWERTY_TOML, write_temp};

#[test]
fn test_load_json_file() {
    let (_dir, path) = write_temp("qwerty.json", QWERTY_JSON);
    let key_set = KeySetLoader::load(&path).unwrap();
    assert_eq!(key_set.name, "qwerty");
    assert_eq!(key_set.authors, vec!["osk".to_string()]);
    assert_eq!(key_set.rows.len(), 2);
    assert_eq!(key_set.key_count(), 7);
}

#[test]
fn test_json_and_toml_agree() {
    let (_json_dir, json_path) = write_temp("qwerty.json", QWERTY_JSON);
    let (_toml_dir, toml_path) = write_temp("qwerty.toml", QWERTY_TOML);
    let from_json = KeySetLoader::load(&json_path).unwrap();
    let from_toml = KeySetLoader::load(&toml_path).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_render_loaded_key_set() {
    let key_set = KeySetLoader::from_json_str(QWERTY_JSON).unwrap();

    let rendered = key_set.render(false, KeyVariation::All, true);
    assert_eq!(rendered[0], vec!["q", "e", "\u{25CC}\u{0301}"]);
    assert_eq!(rendered[1], vec!["shift", ",", "😀", "delete"]);

    let rendered = key_set.render(true, KeyVariation::EmailAddress, false);
    assert_eq!(rendered[0], vec!["Q", "E", "\u{0301}"]);
    assert_eq!(rendered[1], vec!["shift", "@", "😀", "delete"]);

    let rendered = key_set.render(false, KeyVariation::Uri, true);
    assert_eq!(rendered[1][1], "/");
}

#[test]
fn test_round_trip_through_json() {
    let key_set = KeySetLoader::from_toml_str(QWERTY_TOML).unwrap();
    let encoded = serde_json::to_string_pretty(&key_set).unwrap();
    assert_eq!(KeySetLoader::from_json_str(&encoded).unwrap(), key_set);
}

#[test]
fn test_arrangement_alias() {
    let doc = r#"{ "name": "numbers", "arrangement": [[{ "$": "text_key", "code": 49, "label": "1" }]] }"#;
    let key_set = KeySetLoader::from_json_str(doc).unwrap();
    assert_eq!(key_set.rows[0].len(), 1);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = KeySetLoader::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }), "{}", err);
}

#[test]
fn test_unsupported_extension() {
    let (_dir, path) = write_temp("qwerty.yaml", "name: qwerty");
    let err = KeySetLoader::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }), "{}", err);
}

#[test]
fn test_empty_code_points_rejected() {
    let doc = r#"{ "name": "emoji", "rows": [[{ "$": "emoji_key", "codePoints": [] }]] }"#;
    match KeySetLoader::from_json_str(doc).unwrap_err() {
        ConfigError::Parse { format, message, .. } => {
            assert_eq!(format, DocumentFormat::Json);
            assert!(message.contains("codePoints"), "{}", message);
        }
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn test_toml_missing_default_rejected() {
    let doc = r#"
name = "broken"
rows = [[{ "$" = "variation_selector", uri = { "$" = "text_key", code = 47, label = "/" } }]]
"#;
    match KeySetLoader::from_toml_str(doc).unwrap_err() {
        ConfigError::Parse { format, message, .. } => {
            assert_eq!(format, DocumentFormat::Toml);
            assert!(message.contains("default"), "{}", message);
        }
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn test_unknown_top_level_field_rejected() {
    let doc = r#"{ "name": "x", "rows": [[]], "layers": 3 }"#;
    assert!(matches!(
        KeySetLoader::from_json_str(doc),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_invalid_emoji_fails_validation() {
    let doc = r#"{ "name": "emoji", "rows": [[{ "$": "emoji_key", "codePoints": [55296] }]] }"#;
    match KeySetLoader::from_json_str(doc).unwrap_err() {
        ConfigError::Validation { field, .. } => assert_eq!(field, "rows[0][0].codePoints"),
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn test_error_display_includes_path() {
    let (_dir, path) = write_temp("broken.json", "{ not json");
    let err = KeySetLoader::load(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse JSON key set"), "{}", message);
    assert!(message.contains("broken.json"), "{}", message);
}
