use crate::cli::AccountCommand;
use crate::commands::CommandContext;
use crate::error::CliError;
use crate::output::{OutputFormat, write_json};

use models::Account;

use std::io::Write;

pub async fn handle_command(
    context: &CommandContext,
    command: AccountCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        AccountCommand::Info => show_account_info(context, out).await,
    }
}

async fn show_account_info(context: &CommandContext, out: &mut dyn Write) -> Result<(), CliError> {
    let account = context.client()?.get_account().await?;

    match context.format() {
        OutputFormat::Json => write_json(out, &account)?,
        OutputFormat::Text => write_account(out, &account)?,
    }

    Ok(())
}

pub fn write_account(out: &mut dyn Write, account: &Account) -> std::io::Result<()> {
    writeln!(out, "Account Information:")?;
    writeln!(out, "  Email: {}", account.email)?;
    writeln!(out, "  UUID: {}", account.uuid)?;
    writeln!(out, "  Status: {}", account.status)?;
    writeln!(out, "  Email Verified: {}", account.email_verified)?;
    writeln!(out, "  Droplet Limit: {}", account.droplet_limit)?;
    writeln!(out, "  Floating IP Limit: {}", account.floating_ip_limit)?;
    writeln!(out, "  Volume Limit: {}", account.volume_limit)?;

    if let Some(team) = &account.team {
        writeln!(out, "  Team: {} ({})", team.name, team.uuid)?;
    }

    Ok(())
}
