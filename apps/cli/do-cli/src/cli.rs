use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "do-cli")]
#[command(about = "DigitalOcean CLI client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// API token (overrides environment and config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL (overrides environment and config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Account management commands
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },
    /// Droplet management commands
    Droplets {
        #[command(subcommand)]
        command: DropletsCommand,
    },
    /// Image listing
    Images {
        #[command(subcommand)]
        command: ImagesCommand,
    },
    /// Region listing
    Regions {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Droplet size listing
    Sizes {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show account information
    Info,
}

#[derive(Debug, Subcommand)]
pub enum DropletsCommand {
    /// List droplets
    List {
        /// Only droplets with this tag
        #[arg(long)]
        tag: Option<String>,
        /// Page number
        #[arg(long)]
        page: Option<u32>,
        /// Results per page
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Get droplet details
    Get {
        /// Droplet ID
        id: u64,
    },
    /// Create a new droplet
    Create(CreateArgs),
    /// Delete a droplet
    Delete {
        /// Droplet ID
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Reboot a droplet
    Reboot {
        /// Droplet ID
        id: u64,
    },
    /// Power off a droplet
    PowerOff {
        /// Droplet ID
        id: u64,
    },
    /// Power on a droplet
    PowerOn {
        /// Droplet ID
        id: u64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Droplet name
    #[arg(short, long)]
    pub name: String,
    /// Region slug
    #[arg(short, long)]
    pub region: String,
    /// Size slug
    #[arg(short, long)]
    pub size: String,
    /// Image slug or ID
    #[arg(short, long)]
    pub image: String,
    /// Tags (repeat or comma-separate)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
    /// SSH key IDs or fingerprints (repeat or comma-separate)
    #[arg(long, value_delimiter = ',')]
    pub ssh_keys: Vec<String>,
    /// Enable automated backups
    #[arg(long)]
    pub backups: bool,
    /// Enable IPv6
    #[arg(long)]
    pub ipv6: bool,
    /// Install the monitoring agent
    #[arg(long)]
    pub monitoring: bool,
    /// Cloud-init user data
    #[arg(long)]
    pub user_data: Option<String>,
    /// VPC to place the droplet in
    #[arg(long)]
    pub vpc_uuid: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ImagesCommand {
    /// List images
    List {
        /// Image type: distribution or application
        #[arg(long = "type")]
        image_type: Option<String>,
        /// Only the account's private images
        #[arg(long)]
        private: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// List all
    List,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (token, base-url)
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get configuration value(s)
    Get {
        /// Configuration key (optional)
        key: Option<String>,
    },
}
