use crate::cli::{CreateArgs, DropletsCommand};
use crate::commands::CommandContext;
use crate::error::CliError;
use crate::output::{EMPTY_CELL, OutputFormat, Table, or_dash, write_json};
use crate::prompt::confirm;

use models::{Action, CreateDropletRequest, Droplet, DropletActionKind, DropletFilter};

use std::io::{BufRead, Write};

use log::debug;
use serde_json::json;

pub async fn handle_command(
    context: &CommandContext,
    command: DropletsCommand,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    match command {
        DropletsCommand::List {
            tag,
            page,
            per_page,
        } => {
            let filter = DropletFilter {
                tag,
                page,
                per_page,
            };
            list_droplets(context, &filter, out).await
        }
        DropletsCommand::Get { id } => get_droplet(context, id, out).await,
        DropletsCommand::Create(args) => create_droplet(context, args, out).await,
        DropletsCommand::Delete { id, force } => {
            delete_droplet(context, id, force, out, input).await
        }
        DropletsCommand::Reboot { id } => {
            droplet_action(context, id, DropletActionKind::Reboot, out).await
        }
        DropletsCommand::PowerOff { id } => {
            droplet_action(context, id, DropletActionKind::PowerOff, out).await
        }
        DropletsCommand::PowerOn { id } => {
            droplet_action(context, id, DropletActionKind::PowerOn, out).await
        }
    }
}

async fn list_droplets(
    context: &CommandContext,
    filter: &DropletFilter,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let droplets = context.client()?.list_droplets(filter).await?;

    if context.format() == OutputFormat::Json {
        write_json(out, &droplets)?;
        return Ok(());
    }

    if droplets.is_empty() {
        writeln!(out, "No droplets found")?;
        return Ok(());
    }

    droplet_table(&droplets).write(out)?;
    Ok(())
}

pub fn droplet_table(droplets: &[Droplet]) -> Table {
    let mut table = Table::new(&["ID", "NAME", "STATUS", "SIZE", "REGION", "IP", "CREATED"]);

    for droplet in droplets {
        table.add_row(vec![
            droplet.id.to_string(),
            droplet.name.clone(),
            or_dash(&droplet.status),
            or_dash(&droplet.size_slug),
            droplet.region_slug().unwrap_or(EMPTY_CELL).to_string(),
            droplet.public_ipv4().unwrap_or(EMPTY_CELL).to_string(),
            or_dash(droplet.created_date()),
        ]);
    }

    table
}

async fn get_droplet(context: &CommandContext, id: u64, out: &mut dyn Write) -> Result<(), CliError> {
    let droplet = context.client()?.get_droplet(id).await?;

    match context.format() {
        OutputFormat::Json => write_json(out, &droplet)?,
        OutputFormat::Text => write_droplet_details(out, &droplet)?,
    }

    Ok(())
}

pub fn write_droplet_details(out: &mut dyn Write, droplet: &Droplet) -> std::io::Result<()> {
    writeln!(out, "Droplet Details:")?;
    writeln!(out, "  ID: {}", droplet.id)?;
    writeln!(out, "  Name: {}", droplet.name)?;
    writeln!(out, "  Status: {}", droplet.status)?;
    writeln!(out, "  Memory: {} MB", droplet.memory)?;
    writeln!(out, "  VCPUs: {}", droplet.vcpus)?;
    writeln!(out, "  Disk: {} GB", droplet.disk)?;
    writeln!(out, "  Locked: {}", droplet.locked)?;
    writeln!(out, "  Created: {}", droplet.created_at)?;

    if let Some(image) = &droplet.image {
        writeln!(out, "  Image: {} ({})", image.name, image.distribution)?;
    }

    if let Some(size) = &droplet.size {
        writeln!(out, "  Size: {} (${:.2}/month)", size.slug, size.price_monthly)?;
    } else if !droplet.size_slug.is_empty() {
        writeln!(out, "  Size: {}", droplet.size_slug)?;
    }

    if let Some(region) = &droplet.region {
        writeln!(out, "  Region: {} ({})", region.name, region.slug)?;
    }

    if let Some(networks) = &droplet.networks {
        writeln!(out, "  Networks:")?;
        for net in &networks.v4 {
            writeln!(out, "    {}: {}", net.network_type, net.ip_address)?;
        }
        for net in &networks.v6 {
            writeln!(out, "    {} (v6): {}", net.network_type, net.ip_address)?;
        }
    }

    if !droplet.tags.is_empty() {
        writeln!(out, "  Tags: {}", droplet.tags.join(", "))?;
    }

    Ok(())
}

/// Build the request body; unset switches stay out of the JSON.
pub fn build_create_request(args: CreateArgs) -> Result<CreateDropletRequest, CliError> {
    let mut builder = CreateDropletRequest::builder()
        .with_name(args.name)
        .with_region(args.region)
        .with_size(args.size)
        .with_image(args.image)
        .with_tags(args.tags)
        .with_ssh_keys(args.ssh_keys);

    if args.backups {
        builder = builder.with_backups(true);
    }
    if args.ipv6 {
        builder = builder.with_ipv6(true);
    }
    if args.monitoring {
        builder = builder.with_monitoring(true);
    }
    if let Some(user_data) = args.user_data {
        builder = builder.with_user_data(user_data);
    }
    if let Some(vpc_uuid) = args.vpc_uuid {
        builder = builder.with_vpc_uuid(vpc_uuid);
    }

    Ok(builder.build()?)
}

async fn create_droplet(
    context: &CommandContext,
    args: CreateArgs,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let request = build_create_request(args)?;
    let droplet = context.client()?.create_droplet(&request).await?;

    if context.format() == OutputFormat::Json {
        write_json(out, &droplet)?;
        return Ok(());
    }

    writeln!(out, "Droplet created successfully!")?;
    writeln!(out, "  ID: {}", droplet.id)?;
    writeln!(out, "  Name: {}", droplet.name)?;
    writeln!(out, "  Status: {}", droplet.status)?;
    writeln!(out, "  Region: {}", request.region)?;
    writeln!(out, "  Size: {}", request.size)?;

    Ok(())
}

async fn delete_droplet(
    context: &CommandContext,
    id: u64,
    force: bool,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    let client = context.client()?;
    client.ensure_authenticated()?;

    if !force {
        let question = format!("Are you sure you want to delete droplet {id}?");
        if !confirm(input, out, &question)? {
            debug!("Delete of droplet {id} declined");
            writeln!(out, "Cancelled")?;
            return Ok(());
        }
    }

    client.delete_droplet(id).await?;

    match context.format() {
        OutputFormat::Json => write_json(out, &json!({"id": id, "deleted": true}))?,
        OutputFormat::Text => writeln!(out, "Droplet {id} deleted successfully")?,
    }

    Ok(())
}

async fn droplet_action(
    context: &CommandContext,
    id: u64,
    kind: DropletActionKind,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let client = context.client()?;

    let action = match kind {
        DropletActionKind::Reboot => client.reboot_droplet(id).await?,
        DropletActionKind::PowerOff => client.power_off_droplet(id).await?,
        DropletActionKind::PowerOn => client.power_on_droplet(id).await?,
    };

    match context.format() {
        OutputFormat::Json => write_json(out, &action)?,
        OutputFormat::Text => write_action(out, id, kind, &action)?,
    }

    Ok(())
}

fn write_action(
    out: &mut dyn Write,
    id: u64,
    kind: DropletActionKind,
    action: &Action,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Requested {} for droplet {id} (action {}, status {})",
        kind.describe(),
        action.id,
        action.status
    )
}
