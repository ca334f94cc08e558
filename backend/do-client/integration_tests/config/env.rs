//! Tests that read the real process environment.
//!
//! Each one mutates process-wide state, so they are serialized.

use do_client::{
    BASE_URL_ENV_VAR, BASE_URL_ENV_VAR_ALIAS, ClientConfig, ConfigOptions, ConfigPaths,
    EnvSnapshot, TOKEN_ENV_VAR, TOKEN_ENV_VAR_ALIAS,
};

use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: Tests touching the environment are #[serial], so no other thread reads it concurrently.
    unsafe {
        std::env::remove_var(TOKEN_ENV_VAR);
        std::env::remove_var(TOKEN_ENV_VAR_ALIAS);
        std::env::remove_var(BASE_URL_ENV_VAR);
        std::env::remove_var(BASE_URL_ENV_VAR_ALIAS);
    }
}

#[test]
#[serial]
fn given_alias_env_vars_when_snapshot_taken_then_aliases_are_read() {
    clear_env();
    // SAFETY: See clear_env.
    unsafe {
        std::env::set_var(TOKEN_ENV_VAR_ALIAS, "alias-token-123456");
        std::env::set_var(BASE_URL_ENV_VAR_ALIAS, "http://alias.example.com");
    }

    let snapshot = EnvSnapshot::from_process();
    clear_env();

    assert_eq!(snapshot.token.as_deref(), Some("alias-token-123456"));
    assert_eq!(snapshot.base_url.as_deref(), Some("http://alias.example.com"));
}

#[test]
#[serial]
fn given_primary_and_alias_when_snapshot_taken_then_primary_wins() {
    clear_env();
    // SAFETY: See clear_env.
    unsafe {
        std::env::set_var(TOKEN_ENV_VAR, "primary-token-1234");
        std::env::set_var(TOKEN_ENV_VAR_ALIAS, "alias-token-123456");
    }

    let snapshot = EnvSnapshot::from_process();
    clear_env();

    assert_eq!(snapshot.token.as_deref(), Some("primary-token-1234"));
}

/// **VALUE**: End-to-end check of the short-circuit through the real environment.
///
/// **BUG THIS CATCHES**: Would catch `from_process` being bypassed by `resolve`, e.g. a
/// refactor that reads the file first and only consults the environment when it is empty.
#[test]
#[serial]
fn given_env_token_when_resolved_from_process_then_file_token_ignored() {
    // GIVEN: Env token and a different file token
    clear_env();
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"token": "file-token-123456"}"#,
    )
    .expect("write config");
    let paths = ConfigPaths::from_dir(dir.path());
    // SAFETY: See clear_env.
    unsafe {
        std::env::set_var(TOKEN_ENV_VAR, "env-token-abcdef");
    }

    // WHEN: Resolving
    let config = ClientConfig::resolve(ConfigOptions::default(), &EnvSnapshot::from_process(), || {
        Ok(paths)
    });
    clear_env();

    // THEN: Environment wins
    assert_eq!(
        config.expect("resolve").token().as_str(),
        "env-token-abcdef"
    );
}
