//! Shared fixtures: run the CLI in-process against a mock API.

use do_cli::cli::Cli;
use do_cli::error::CliError;
use do_cli::run;

use std::io::Cursor;

use clap::Parser;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "dop_v1_integrationtesttoken";

/// Captured result of one in-process invocation.
pub struct Invocation {
    pub result: Result<(), CliError>,
    pub stdout: String,
}

/// Run `do-cli <args>` with `--token` and `--base-url` pointing at `server`.
pub async fn run_against(server: &MockServer, args: &[&str], stdin: &str) -> Invocation {
    let uri = server.uri();
    let mut argv = vec!["do-cli", "--token", TEST_TOKEN, "--base-url", uri.as_str()];
    argv.extend_from_slice(args);

    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    let mut out: Vec<u8> = Vec::new();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());

    let result = run(cli, &mut out, &mut input).await;

    Invocation {
        result,
        stdout: String::from_utf8(out).expect("stdout is UTF-8"),
    }
}
