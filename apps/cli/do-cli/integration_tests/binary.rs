#![allow(deprecated)] // TODO: move Command::cargo_bin to the cargo_bin_cmd! macro

//! End-to-end tests of the `do-cli` binary: exit codes, stderr, stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `do-cli` with a scrubbed environment and an isolated config directory.
fn do_cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("do-cli").expect("binary built");
    cmd.current_dir(config_dir.path())
        .env("DO_CLI_CONFIG_DIR", config_dir.path())
        .env_remove("DIGITALOCEAN_TOKEN")
        .env_remove("DIGITALOCEAN_ACCESS_TOKEN")
        .env_remove("DIGITALOCEAN_BASE_URL")
        .env_remove("DIGITALOCEAN_API_URL");
    cmd
}

#[test]
fn given_help_flag_when_run_then_lists_command_groups() {
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("droplets"))
        .stdout(predicate::str::contains("config"));
}

/// **VALUE**: `config set` followed by `config get` shows the stored token masked.
///
/// **WHY THIS MATTERS**: This is the first thing a new user runs. The token must survive the
/// round trip through the file and must never be printed in full.
///
/// **BUG THIS CATCHES**: Would catch `save()` writing to a different file than `load()` reads,
/// or `config get` printing the raw token.
#[test]
fn given_config_set_when_config_get_then_masked_token_shown() {
    // GIVEN: A fresh config directory
    let dir = TempDir::new().expect("temp dir");

    // WHEN: Setting the token
    do_cli(&dir)
        .args(["config", "set", "token", "dop_v1_abcdefgh12345678"])
        .assert()
        .success()
        .stdout("Configuration updated: token = dop_...5678\n");

    // THEN: Reading it back shows the masked form only
    do_cli(&dir)
        .args(["config", "get", "token"])
        .assert()
        .success()
        .stdout("token: dop_...5678\n");

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn given_env_token_when_config_set_base_url_then_env_token_not_persisted() {
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .env("DIGITALOCEAN_TOKEN", "env-token-abcdef123")
        .args(["config", "set", "base-url", "http://localhost:4000"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("config.json")).expect("config written");
    assert!(!written.contains("env-token"));
    assert!(written.contains("http://localhost:4000"));
}

#[test]
fn given_unknown_config_key_when_set_then_error_exit_1() {
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .args(["config", "set", "color", "blue"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Unknown config key: color"));
}

#[test]
fn given_no_token_anywhere_when_account_info_then_authentication_error() {
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .args(["account", "info"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Error: Authentication token is required\n");
}

/// **VALUE**: API failures reach the user as `Error: <message>` with exit code 1.
///
/// **BUG THIS CATCHES**: Would catch the binary exiting 0 on errors (breaking scripts), or
/// printing the Display form with source locations instead of the API message.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_api_error_when_run_then_stderr_message_and_exit_1() {
    // GIVEN: An API that rejects the request
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"id": "e1", "message": "bad size"}]
        })))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");

    // WHEN / THEN
    do_cli(&dir)
        .env("DIGITALOCEAN_TOKEN", "env-token-abcdef123")
        .env("DIGITALOCEAN_BASE_URL", server.uri())
        .args([
            "droplets", "create", "--name", "web", "--region", "nyc3", "--size", "huge",
            "--image", "ubuntu-24-04-x64",
        ])
        .assert()
        .code(1)
        .stderr("Error: bad size\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_declined_stdin_when_delete_then_cancelled_exit_0() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .args(["--token", "dop_v1_abcdefgh12345678", "--base-url"])
        .arg(server.uri())
        .args(["droplets", "delete", "42"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_dotenv_file_when_run_then_token_loaded_from_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplets": []})))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join(".env"),
        format!(
            "DIGITALOCEAN_TOKEN=dotenv-token-123456\nDIGITALOCEAN_BASE_URL={}\n",
            server.uri()
        ),
    )
    .expect("write .env");

    do_cli(&dir)
        .args(["droplets", "list"])
        .assert()
        .success()
        .stdout("No droplets found\n");
}

/// **VALUE**: Rejected arguments exit 1 like every other failure, while `--version` still
/// exits 0.
///
/// **WHY THIS MATTERS**: Scripts check for a non-zero exit of exactly 1; clap's own default
/// for usage errors is 2.
///
/// **BUG THIS CATCHES**: Would catch a return to `Cli::parse()`, or `--help`/`--version`
/// being reported as failures after switching to `try_parse()`.
#[test]
fn given_unknown_subcommand_when_run_then_usage_on_stderr_and_exit_1() {
    // GIVEN
    let dir = TempDir::new().expect("temp dir");

    // WHEN / THEN: Usage error exits 1
    do_cli(&dir)
        .args(["droplets", "explode"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("explode"));

    // WHEN / THEN: Informational output still exits 0
    do_cli(&dir).arg("--version").assert().success();
}

/// **VALUE**: Deleting without a token fails before the confirmation prompt is shown.
///
/// **BUG THIS CATCHES**: Would catch the prompt being asked first, so the user answers "y"
/// only to learn afterwards that nothing could have been deleted.
#[test]
fn given_no_token_when_delete_then_fails_before_prompting() {
    let dir = TempDir::new().expect("temp dir");

    do_cli(&dir)
        .args(["droplets", "delete", "42"])
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Error: Authentication token is required\n");
}
