//! DigitalOcean API v2 client.
//!
//! - [`config`]: resolves the token and base URL from explicit options, the
//!   environment, the per-user config file and built-in defaults
//! - [`client`]: the request wrapper and one typed method per endpoint
//! - [`error`]: `ClientError` / `ConfigError`, each variant carrying an
//!   [`common::ErrorLocation`]

pub mod client;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use client::DigitalOceanClient;
pub use config::{ClientConfig, ConfigOptions, ConfigPaths, EnvSnapshot};
pub use error::client::ClientError;
pub use error::config::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.digitalocean.com";
pub const USER_AGENT: &str = const_format::concatcp!("do-cli/", env!("CARGO_PKG_VERSION"));

pub const TOKEN_ENV_VAR: &str = "DIGITALOCEAN_TOKEN";
pub const TOKEN_ENV_VAR_ALIAS: &str = "DIGITALOCEAN_ACCESS_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "DIGITALOCEAN_BASE_URL";
pub const BASE_URL_ENV_VAR_ALIAS: &str = "DIGITALOCEAN_API_URL";
pub const CONFIG_DIR_ENV_VAR: &str = "DO_CLI_CONFIG_DIR";
