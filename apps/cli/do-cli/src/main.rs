use do_cli::cli::Cli;
use do_cli::error::CliError;
use do_cli::logger::{DEFAULT_LEVEL, VERBOSE_LEVEL, initialize as LoggerInitialize};
use do_cli::run;

use common::ErrorLocation;

use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

fn main() -> ExitCode {
    // Never overrides variables that are already set
    let dotenv = dotenvy::dotenv();

    // Usage errors exit 1 like every other failure; --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(print_error) = e.print() {
                eprintln!("Error: {print_error}");
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if cli.global.verbose {
        VERBOSE_LEVEL
    } else {
        DEFAULT_LEVEL
    };

    if let Err(e) = LoggerInitialize(level, cli.global.log_file.as_deref()) {
        eprintln!("Error: {}", e.message());
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => debug!("Ignoring .env file: {e}"),
    }

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.message());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Output {
            message: format!("Failed to start async runtime: {e}"),
            location: ErrorLocation::caller(),
        })?;

    let mut out = stdout().lock();
    let mut input = stdin().lock();

    runtime.block_on(run(cli, &mut out, &mut input))
}
