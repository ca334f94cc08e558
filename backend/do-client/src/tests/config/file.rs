use crate::config::{ConfigFile, ConfigPaths};
use crate::error::config::ConfigError;

use tempfile::TempDir;

/// **VALUE**: YAML files are read when no JSON file exists.
///
/// **WHY THIS MATTERS**: Hand-written configs are often YAML; only `save()` is JSON-only.
///
/// **BUG THIS CATCHES**: Would catch the YAML candidates being dropped from the lookup,
/// or YAML content being fed to the JSON parser.
#[test]
fn given_only_yaml_file_when_loaded_then_yaml_values_used() {
    // GIVEN: A config.yml with the camelCase alias
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.yml"),
        "token: yaml-token-123456\nbaseUrl: https://yaml.example.com\n",
    )
    .expect("write yaml");

    // WHEN: Loading
    let file = ConfigFile::load(&ConfigPaths::from_dir(dir.path()))
        .expect("load")
        .expect("file present");

    // THEN: Both fields read
    assert_eq!(file.token.as_deref(), Some("yaml-token-123456"));
    assert_eq!(file.base_url.as_deref(), Some("https://yaml.example.com"));
}

#[test]
fn given_json_and_yaml_files_when_loaded_then_json_wins() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), r#"{"token": "json-token"}"#)
        .expect("write json");
    std::fs::write(dir.path().join("config.yaml"), "token: yaml-token\n").expect("write yaml");

    let file = ConfigFile::load(&ConfigPaths::from_dir(dir.path()))
        .expect("load")
        .expect("file present");

    assert_eq!(file.token.as_deref(), Some("json-token"));
}

#[test]
fn given_no_file_when_loaded_then_none() {
    let dir = TempDir::new().expect("temp dir");

    let file = ConfigFile::load(&ConfigPaths::from_dir(dir.path())).expect("load");

    assert!(file.is_none());
}

#[test]
fn given_empty_file_when_loaded_then_default() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "  \n").expect("write");

    let file = ConfigFile::load(&ConfigPaths::from_dir(dir.path()))
        .expect("load")
        .expect("file present");

    assert_eq!(file, ConfigFile::default());
}

#[test]
fn given_malformed_yaml_when_loaded_then_parse_error_names_file() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.yaml"), "token: [unclosed\n").expect("write");

    let error = ConfigFile::load(&ConfigPaths::from_dir(dir.path())).unwrap_err();

    match error {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("config.yaml")),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn given_config_file_when_debug_formatted_then_token_is_masked() {
    let file = ConfigFile {
        token: Some(String::from("dop_v1_supersecretvalue")),
        base_url: None,
    };

    let debug = format!("{file:?}");

    assert!(!debug.contains("supersecret"));
    assert!(debug.contains("dop_...alue"));
}

/// **VALUE**: The saved config file is readable by its owner only.
///
/// **WHY THIS MATTERS**: The file holds the API token in clear text. With the default umask
/// it would be world-readable on a shared machine.
///
/// **BUG THIS CATCHES**: Would catch `save()` creating the file with default permissions, or
/// a leftover temp file passing its looser mode on through the rename.
#[cfg(unix)]
#[test]
fn given_token_when_saved_then_file_mode_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    // GIVEN: A config directory with a stale, world-readable temp file
    let dir = TempDir::new().expect("temp dir");
    let paths = ConfigPaths::from_dir(dir.path());
    let stale = paths.json_file().with_extension("json.tmp");
    std::fs::write(&stale, "stale").expect("write stale temp");
    std::fs::set_permissions(&stale, std::fs::Permissions::from_mode(0o644))
        .expect("loosen stale temp");

    let file = ConfigFile {
        token: Some(String::from("dop_v1_secrettoken123")),
        base_url: None,
    };

    // WHEN: Saving
    file.save(&paths).expect("save");

    // THEN: Only the owner can read or write it
    let mode = std::fs::metadata(paths.json_file())
        .expect("metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
    assert!(!stale.exists());
}
