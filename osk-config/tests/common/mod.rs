#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const QWERTY_JSON: &str = r#"{
  "name": "qwerty",
  "authors": ["osk"],
  "rows": [
    [
      { "$": "case_selector",
        "lower": { "$": "text_key", "code": 113, "label": "q" },
        "upper": { "$": "text_key", "code": 81, "label": "Q" } },
      { "$": "popup_aware_text_key", "code": 101, "label": "e", "groupId": 0,
        "popup": { "relevant": [{ "code": 233, "label": "é" }, { "code": 232, "label": "è" }] } },
      { "$": "text_key", "code": 769, "label": "\u0301" }
    ],
    [
      { "$": "text_key", "type": "MODIFIER", "code": -11, "label": "shift" },
      { "$": "variation_selector",
        "default": { "$": "text_key", "code": 44, "label": "," },
        "email": { "$": "text_key", "code": 64, "label": "@" },
        "uri": { "$": "text_key", "code": 47, "label": "/" } },
      { "$": "emoji_key", "codePoints": [128512], "label": "grinning face" },
      { "$": "text_key", "type": "enter_editing", "code": -7, "label": "delete" }
    ]
  ]
}"#;

pub const QWERTY_TOML: &str = r#"
name = "qwerty"
authors = ["osk"]
rows = [
  [
    { "$" = "case_selector", lower = { "$" = "text_key", code = 113, label = "q" }, upper = { "$" = "text_key", code = 81, label = "Q" } },
    { "$" = "popup_aware_text_key", code = 101, label = "e", groupId = 0, popup = { relevant = [{ code = 233, label = "é" }, { code = 232, label = "è" }] } },
    { "$" = "text_key", code = 769, label = "\u0301" },
  ],
  [
    { "$" = "text_key", type = "MODIFIER", code = -11, label = "shift" },
    { "$" = "variation_selector", default = { "$" = "text_key", code = 44, label = "," }, email = { "$" = "text_key", code = 64, label = "@" }, uri = { "$" = "text_key", code = 47, label = "/" } },
    { "$" = "emoji_key", codePoints = [128512], label = "grinning face" },
    { "$" = "text_key", type = "enter_editing", code = -7, label = "delete" },
  ],
]
"#;

/// Write `content` to `name` in a fresh temporary directory
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (dir, path)
}
