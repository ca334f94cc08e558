//! `images`, `regions` and `sizes` listings.

use crate::cli::{ImagesCommand, ListCommand};
use crate::commands::CommandContext;
use crate::error::CliError;
use crate::output::{EMPTY_CELL, OutputFormat, Table, or_dash, write_json};

use models::{Image, ImageFilter, Region, Size};

use std::io::Write;

pub async fn handle_images(
    context: &CommandContext,
    command: ImagesCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ImagesCommand::List {
        image_type,
        private,
    } = command;

    let filter = ImageFilter {
        image_type,
        private,
    };
    let images = context.client()?.list_images(&filter).await?;

    if context.format() == OutputFormat::Json {
        write_json(out, &images)?;
        return Ok(());
    }

    if images.is_empty() {
        writeln!(out, "No images found")?;
        return Ok(());
    }

    image_table(&images).write(out)?;
    Ok(())
}

pub async fn handle_regions(
    context: &CommandContext,
    command: ListCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ListCommand::List = command;

    let regions = context.client()?.list_regions().await?;

    if context.format() == OutputFormat::Json {
        write_json(out, &regions)?;
        return Ok(());
    }

    if regions.is_empty() {
        writeln!(out, "No regions found")?;
        return Ok(());
    }

    region_table(&regions).write(out)?;
    Ok(())
}

pub async fn handle_sizes(
    context: &CommandContext,
    command: ListCommand,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let ListCommand::List = command;

    let sizes = context.client()?.list_sizes().await?;

    if context.format() == OutputFormat::Json {
        write_json(out, &sizes)?;
        return Ok(());
    }

    if sizes.is_empty() {
        writeln!(out, "No sizes found")?;
        return Ok(());
    }

    size_table(&sizes).write(out)?;
    Ok(())
}

pub fn image_table(images: &[Image]) -> Table {
    let mut table = Table::new(&["ID", "NAME", "TYPE", "DISTRIBUTION", "SLUG", "MIN DISK"]);

    for image in images {
        table.add_row(vec![
            image.id.to_string(),
            image.name.clone(),
            or_dash(&image.image_type),
            or_dash(&image.distribution),
            image.slug.as_deref().unwrap_or(EMPTY_CELL).to_string(),
            format!("{} GB", image.min_disk_size),
        ]);
    }

    table
}

pub fn region_table(regions: &[Region]) -> Table {
    let mut table = Table::new(&["SLUG", "NAME", "AVAILABLE"]);

    for region in regions {
        table.add_row(vec![
            region.slug.clone(),
            region.name.clone(),
            region.available.to_string(),
        ]);
    }

    table
}

pub fn size_table(sizes: &[Size]) -> Table {
    let mut table = Table::new(&["SLUG", "MEMORY", "VCPUS", "DISK", "PRICE/MONTH", "AVAILABLE"]);

    for size in sizes {
        table.add_row(vec![
            size.slug.clone(),
            format!("{} MB", size.memory),
            size.vcpus.to_string(),
            format!("{} GB", size.disk),
            format!("${:.2}", size.price_monthly),
            size.available.to_string(),
        ]);
    }

    table
}
