//! One handler per subcommand group.
//!
//! Every handler loads config, calls exactly one client method and renders the
//! result to `out`. Errors propagate to [`run`]'s caller unchanged.

pub mod account;
pub mod catalog;
pub mod config;
pub mod droplets;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::error::CliError;
use crate::output::OutputFormat;

use do_client::{ConfigOptions, DigitalOceanClient};

use std::io::{BufRead, Write};

/// Per-invocation settings shared by all handlers.
#[derive(Clone, Default)]
pub struct CommandContext {
    pub options: ConfigOptions,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn from_global(global: &GlobalArgs) -> Self {
        Self {
            options: ConfigOptions {
                token: global.token.clone(),
                base_url: global.base_url.clone(),
            },
            format: OutputFormat::from_json_flag(global.json),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn client(&self) -> Result<DigitalOceanClient, CliError> {
        Ok(DigitalOceanClient::from_options(self.options.clone())?)
    }
}

/// Execute a parsed command line.
///
/// `out` receives normal output (including the delete prompt); `input` is
/// read for the delete confirmation.
pub async fn run(cli: Cli, out: &mut dyn Write, input: &mut dyn BufRead) -> Result<(), CliError> {
    let context = CommandContext::from_global(&cli.global);

    match cli.command {
        Commands::Account { command } => account::handle_command(&context, command, out).await,
        Commands::Droplets { command } => {
            droplets::handle_command(&context, command, out, input).await
        }
        Commands::Images { command } => catalog::handle_images(&context, command, out).await,
        Commands::Regions { command } => catalog::handle_regions(&context, command, out).await,
        Commands::Sizes { command } => catalog::handle_sizes(&context, command, out).await,
        Commands::Config { command } => config::handle_command(&context, command, out),
    }
}
