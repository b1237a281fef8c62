//! Tests for loading status text templates from disk.

use noughts::{Engine, MessageConfig};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
turn = "Au tour de {{player}}"
won = "{{player}} a gagné !"
draw = "Match nul !"
"#
    )
    .expect("write config");

    let config = MessageConfig::from_file(file.path()).expect("load config");
    let mut engine = Engine::with_messages(config);
    assert_eq!(engine.status_label(), "Au tour de X");

    for i in [0, 3, 1, 4, 2] {
        engine.apply_move(i);
    }
    assert_eq!(engine.status_label(), "X a gagné !");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = MessageConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = MessageConfig::from_file(file.path()).expect("load config");
    assert_eq!(config, MessageConfig::default());
}
