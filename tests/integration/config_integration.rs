//! Integration tests for configuration loading

use super::test_utils::workspace;
use docindex::config::ConfigLoader;
use std::fs;

#[test]
fn test_load_from_file() {
    let ws = workspace(&[(
        "docindex.toml",
        r#"
[index]
humanize_titles = true
include_all_files = true
start_marker = "<!-- toc -->"
end_marker = "<!-- /toc -->"

[logging]
level = "debug"
format = "json"
"#,
    )]);

    let config = ConfigLoader::load_from_file(&ws.path().join("docindex.toml")).unwrap();
    assert!(config.index.humanize_titles);
    assert!(config.index.include_all_files);
    assert!(!config.index.emoji);
    assert!(config.index.root_tree);
    assert_eq!(config.index.start_marker, "<!-- toc -->");
    assert_eq!(config.index.heading, "Contents");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert!(config.validate().is_ok());
}

#[test]
fn test_workspace_file_is_picked_up() {
    let ws = workspace(&[(".docindex.toml", "[index]\nemoji = true\nroot_tree = false\n")]);

    let config = ConfigLoader::load(ws.path()).unwrap();
    assert!(config.index.emoji);
    assert!(!config.index.root_tree);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let ws = workspace(&[]);
    assert!(ConfigLoader::load_from_file(&ws.path().join("absent.toml")).is_err());
}

#[test]
fn test_invalid_toml_is_error() {
    let ws = workspace(&[]);
    let path = ws.path().join("bad.toml");
    fs::write(&path, "[index\nemoji = ").unwrap();
    assert!(ConfigLoader::load_from_file(&path).is_err());
}
