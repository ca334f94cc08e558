use crate::config::{ConfigPaths, PathSource};

use std::path::PathBuf;

#[test]
fn given_override_when_detected_then_uses_override() {
    let paths = ConfigPaths::detect_from(Some("/tmp/do-cli-test")).expect("detect");

    assert_eq!(paths.config_dir, PathBuf::from("/tmp/do-cli-test"));
    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.json_file(), PathBuf::from("/tmp/do-cli-test/config.json"));
}

/// **BUG THIS CATCHES**: Would catch `DO_CLI_CONFIG_DIR=` (empty) being honoured, which would
/// put config files in the current working directory.
#[test]
fn given_empty_override_when_detected_then_falls_back_to_home() {
    let Ok(paths) = ConfigPaths::detect_from(Some("")) else {
        // No home directory on this machine; nothing else to check.
        return;
    };

    assert_eq!(paths.source, PathSource::HomeDefault);
    assert!(paths.config_dir.ends_with(".config/do-cli"));
}

#[test]
fn given_dir_when_candidates_listed_then_json_first_then_yml_then_yaml() {
    let paths = ConfigPaths::from_dir("/cfg");

    let names: Vec<_> = paths
        .candidates()
        .iter()
        .map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();

    assert_eq!(
        names,
        vec![
            Some(String::from("config.json")),
            Some(String::from("config.yml")),
            Some(String::from("config.yaml")),
        ]
    );
}
