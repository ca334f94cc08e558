use crate::DEFAULT_BASE_URL;
use crate::config::{ClientConfig, ConfigOptions, ConfigPaths, EnvSnapshot, parse_base_url};
use crate::error::config::ConfigError;

use tempfile::TempDir;

fn write_json(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("config.json"), contents).expect("write config.json");
}

fn env(token: Option<&str>, base_url: Option<&str>) -> EnvSnapshot {
    EnvSnapshot {
        token: token.map(String::from),
        base_url: base_url.map(String::from),
    }
}

// ----------------------------------------------------------------------------
// Precedence
// ----------------------------------------------------------------------------

/// **VALUE**: Pins the short-circuit rule: an environment token means the file is never consulted.
///
/// **WHY THIS MATTERS**: Users export `DIGITALOCEAN_TOKEN` in CI while a stale personal token
/// sits in `~/.config/do-cli/config.json`. Mixing the two would send the wrong credentials.
///
/// **BUG THIS CATCHES**: Would catch a per-field merge that still reads the file, or a
/// precedence flip that lets the file token win.
#[test]
fn given_env_token_and_file_token_when_resolved_then_file_is_not_read() {
    // GIVEN: A file with a different token and base URL
    let dir = TempDir::new().expect("temp dir");
    write_json(
        &dir,
        r#"{"token": "file-token-123456", "base_url": "https://file.example.com"}"#,
    );
    let paths = ConfigPaths::from_dir(dir.path());

    // WHEN: Resolving with an environment token
    let mut paths_requested = false;
    let config = ClientConfig::resolve(
        ConfigOptions::default(),
        &env(Some("env-token-abcdef"), None),
        || {
            paths_requested = true;
            Ok(paths)
        },
    )
    .expect("resolve");

    // THEN: Environment token, default base URL, file untouched
    assert_eq!(config.token().as_str(), "env-token-abcdef");
    assert_eq!(config.display_base_url(), DEFAULT_BASE_URL);
    assert!(!paths_requested, "Config file must not be located when env supplies a token");
}

#[test]
fn given_options_and_env_when_resolved_then_options_win() {
    let config = ClientConfig::resolve(
        ConfigOptions::default()
            .with_token("option-token-1234")
            .with_base_url("http://localhost:9000"),
        &env(Some("env-token-abcdef"), Some("https://env.example.com")),
        || panic!("config file must not be read"),
    )
    .expect("resolve");

    assert_eq!(config.token().as_str(), "option-token-1234");
    assert_eq!(config.display_base_url(), "http://localhost:9000");
}

#[test]
fn given_option_token_and_env_base_url_when_resolved_then_fields_mix() {
    let config = ClientConfig::resolve(
        ConfigOptions::default().with_token("option-token-1234"),
        &env(None, Some("https://env.example.com")),
        || panic!("config file must not be read"),
    )
    .expect("resolve");

    assert_eq!(config.token().as_str(), "option-token-1234");
    assert_eq!(config.display_base_url(), "https://env.example.com");
}

/// **VALUE**: The file is the fallback when nothing else supplies a token.
///
/// **BUG THIS CATCHES**: Would catch the file being skipped entirely, which would make
/// `config set token` useless.
#[test]
fn given_only_file_when_resolved_then_file_values_used() {
    // GIVEN: Only a config file
    let dir = TempDir::new().expect("temp dir");
    write_json(
        &dir,
        r#"{"token": "file-token-123456", "base_url": "https://file.example.com"}"#,
    );
    let paths = ConfigPaths::from_dir(dir.path());

    // WHEN: Resolving with empty options and environment
    let config = ClientConfig::resolve(ConfigOptions::default(), &EnvSnapshot::default(), || {
        Ok(paths)
    })
    .expect("resolve");

    // THEN: File values
    assert_eq!(config.token().as_str(), "file-token-123456");
    assert_eq!(config.display_base_url(), "https://file.example.com");
}

#[test]
fn given_env_base_url_without_token_when_resolved_then_env_base_url_beats_file() {
    let dir = TempDir::new().expect("temp dir");
    write_json(
        &dir,
        r#"{"token": "file-token-123456", "base_url": "https://file.example.com"}"#,
    );
    let paths = ConfigPaths::from_dir(dir.path());

    let config = ClientConfig::resolve(
        ConfigOptions::default(),
        &env(None, Some("https://env.example.com")),
        || Ok(paths),
    )
    .expect("resolve");

    assert_eq!(config.token().as_str(), "file-token-123456");
    assert_eq!(config.display_base_url(), "https://env.example.com");
}

#[test]
fn given_nothing_configured_when_resolved_then_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let paths = ConfigPaths::from_dir(dir.path());

    let config = ClientConfig::resolve(ConfigOptions::default(), &EnvSnapshot::default(), || {
        Ok(paths)
    })
    .expect("resolve");

    assert!(config.token().is_empty());
    assert_eq!(config.masked_token(), "<not set>");
    assert_eq!(config.display_base_url(), DEFAULT_BASE_URL);
}

/// **VALUE**: Empty strings are treated as absent.
///
/// **WHY THIS MATTERS**: `DIGITALOCEAN_TOKEN=` in a `.env` file is common. Treating it as a
/// real (empty) token would short-circuit past the config file and fail every request.
///
/// **BUG THIS CATCHES**: Would catch `Some("")` being accepted as an override.
#[test]
fn given_empty_env_token_when_resolved_then_falls_through_to_file() {
    // GIVEN: Empty environment token and a file token
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir, r#"{"token": "file-token-123456"}"#);
    let paths = ConfigPaths::from_dir(dir.path());

    // WHEN: Resolving
    let config = ClientConfig::resolve(
        ConfigOptions::default().with_token(""),
        &env(Some("   "), Some("")),
        || Ok(paths),
    )
    .expect("resolve");

    // THEN: File token and default base URL
    assert_eq!(config.token().as_str(), "file-token-123456");
    assert_eq!(config.display_base_url(), DEFAULT_BASE_URL);
}

#[test]
fn given_corrupt_file_when_resolved_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    write_json(&dir, "{ not json");
    let paths = ConfigPaths::from_dir(dir.path());

    let result =
        ClientConfig::resolve(ConfigOptions::default(), &EnvSnapshot::default(), || Ok(paths));

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_base_url_when_resolved_then_validation_error() {
    let result = ClientConfig::resolve(
        ConfigOptions::default()
            .with_token("option-token-1234")
            .with_base_url("ftp://example.com"),
        &EnvSnapshot::default(),
        || panic!("config file must not be read"),
    );

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_directory_error_when_no_token_override_then_error_propagates() {
    let result = ClientConfig::resolve(ConfigOptions::default(), &EnvSnapshot::default(), || {
        Err(ConfigError::DirectoryNotFound {
            location: common::ErrorLocation::caller(),
            reason: String::from("no home"),
        })
    });

    assert!(matches!(result, Err(ConfigError::DirectoryNotFound { .. })));
}

// ----------------------------------------------------------------------------
// from_file / save
// ----------------------------------------------------------------------------

#[test]
fn given_saved_config_when_loaded_from_file_then_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let paths = ConfigPaths::from_dir(dir.path().join("nested"));

    let mut config = ClientConfig::from_file(&paths).expect("defaults");
    config.set_token("dop_v1_abcdefgh12345678");
    config
        .set_base_url("http://localhost:8080")
        .expect("valid base URL");
    config.save(&paths).expect("save");

    let reloaded = ClientConfig::from_file(&paths).expect("reload");

    assert_eq!(reloaded, config);
    assert!(!paths.config_dir.join("config.json.tmp").exists());
}

#[test]
fn given_empty_token_when_saved_then_token_key_is_omitted() {
    let dir = TempDir::new().expect("temp dir");
    let paths = ConfigPaths::from_dir(dir.path());

    ClientConfig::from_file(&paths)
        .expect("defaults")
        .save(&paths)
        .expect("save");

    let written = std::fs::read_to_string(paths.json_file()).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid JSON");
    assert!(value.get("token").is_none());
    assert_eq!(value["base_url"], DEFAULT_BASE_URL);
}

// ----------------------------------------------------------------------------
// parse_base_url
// ----------------------------------------------------------------------------

#[test]
fn given_base_url_with_path_when_parsed_then_gets_trailing_slash() {
    let url = parse_base_url("http://localhost:8080/proxy").expect("valid");

    assert_eq!(url.as_str(), "http://localhost:8080/proxy/");
}

#[test]
fn given_relative_or_non_http_url_when_parsed_then_rejected() {
    assert!(parse_base_url("api.digitalocean.com").is_err());
    assert!(parse_base_url("/v2").is_err());
    assert!(parse_base_url("mailto:someone@example.com").is_err());
}
