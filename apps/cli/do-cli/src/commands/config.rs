//! `config set` / `config get`.

use crate::cli::ConfigCommand;
use crate::commands::CommandContext;
use crate::error::CliError;
use crate::output::{OutputFormat, write_json};

use do_client::config::{ConfigFile, parse_base_url};
use do_client::{ClientConfig, ConfigPaths};

use common::mask_token;

use std::io::Write;

use serde_json::json;

pub const TOKEN_KEY: &str = "token";
pub const BASE_URL_KEY: &str = "base-url";

pub fn handle_command(
    context: &CommandContext,
    command: ConfigCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        ConfigCommand::Set { key, value } => set_config(&ConfigPaths::detect()?, &key, &value, out),
        ConfigCommand::Get { key } => get_config(context, key.as_deref(), out),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::usage(format!(
        "Unknown config key: {key} (expected {TOKEN_KEY} or {BASE_URL_KEY})"
    ))
}

/// Update one key in the config file.
///
/// Works on the raw file so environment values are never written back and a
/// broken value in the other field does not block the update. Only the new
/// value is validated.
pub fn set_config(
    paths: &ConfigPaths,
    key: &str,
    value: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut file = ConfigFile::load(paths)?.unwrap_or_default();

    let shown = match key {
        TOKEN_KEY => {
            let token = value.trim();
            file.token = Some(token.to_string()).filter(|t| !t.is_empty());
            mask_token(token)
        }
        BASE_URL_KEY => {
            let url = parse_base_url(value)?;
            let shown = url.as_str().trim_end_matches('/').to_string();
            file.base_url = Some(shown.clone());
            shown
        }
        other => return Err(unknown_key(other)),
    };

    file.save(paths)?;

    writeln!(out, "Configuration updated: {key} = {shown}")?;
    Ok(())
}

/// Show the effective configuration; the token is always masked.
fn get_config(
    context: &CommandContext,
    key: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = ClientConfig::load(context.options.clone())?;
    write_config(&config, key, context.format(), out)
}

pub fn write_config(
    config: &ClientConfig,
    key: Option<&str>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let token = config.masked_token();
    let base_url = config.display_base_url();

    match (key, format) {
        (Some(TOKEN_KEY), OutputFormat::Text) => writeln!(out, "{TOKEN_KEY}: {token}")?,
        (Some(BASE_URL_KEY), OutputFormat::Text) => writeln!(out, "{BASE_URL_KEY}: {base_url}")?,
        (Some(TOKEN_KEY), OutputFormat::Json) => write_json(out, &json!({"token": token}))?,
        (Some(BASE_URL_KEY), OutputFormat::Json) => {
            write_json(out, &json!({"base_url": base_url}))?
        }
        (Some(other), _) => return Err(unknown_key(other)),
        (None, OutputFormat::Text) => {
            writeln!(out, "Configuration:")?;
            writeln!(out, "  {TOKEN_KEY}: {token}")?;
            writeln!(out, "  {BASE_URL_KEY}: {base_url}")?;
        }
        (None, OutputFormat::Json) => {
            write_json(out, &json!({"token": token, "base_url": base_url}))?
        }
    }

    Ok(())
}
