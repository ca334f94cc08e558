//! Resolution of the API token and base URL.
//!
//! Per field, first match wins:
//! 1. explicit [`ConfigOptions`] (CLI flags)
//! 2. environment ([`EnvSnapshot`])
//! 3. the per-user config file ([`ConfigFile`])
//! 4. defaults: empty token, [`DEFAULT_BASE_URL`]
//!
//! A token from (1) or (2) short-circuits: the config file is not read at all,
//! and its base URL is ignored too.

pub mod file;
pub mod paths;

pub use file::ConfigFile;
pub use paths::{ConfigPaths, PathSource};

use crate::error::config::ConfigError;
use crate::{
    BASE_URL_ENV_VAR, BASE_URL_ENV_VAR_ALIAS, DEFAULT_BASE_URL, TOKEN_ENV_VAR,
    TOKEN_ENV_VAR_ALIAS,
};

use common::RedactedToken;

use std::env;

use log::{debug, info};
use url::Url;

/// Values supplied explicitly by the caller.
#[derive(Clone, Default)]
pub struct ConfigOptions {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

impl ConfigOptions {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// The environment variables the resolver looks at, captured once.
#[derive(Clone, Default)]
pub struct EnvSnapshot {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

impl EnvSnapshot {
    /// Read `DIGITALOCEAN_TOKEN` (or `DIGITALOCEAN_ACCESS_TOKEN`) and
    /// `DIGITALOCEAN_BASE_URL` (or `DIGITALOCEAN_API_URL`).
    pub fn from_process() -> Self {
        Self {
            token: first_set(&[TOKEN_ENV_VAR, TOKEN_ENV_VAR_ALIAS]),
            base_url: first_set(&[BASE_URL_ENV_VAR, BASE_URL_ENV_VAR_ALIAS]),
        }
    }
}

fn first_set(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| non_empty(env::var(name).ok()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse and check a base URL: absolute, `http` or `https`, with a host.
///
/// The path always ends in `/` so relative endpoint paths join beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();

    let mut url = Url::parse(trimmed)
        .map_err(|e| ConfigError::validation(format!("Invalid base URL '{trimmed}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(ConfigError::validation(format!(
            "Invalid base URL '{trimmed}': must be an absolute http or https URL"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Resolved token and base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    token: RedactedToken,
    base_url: Url,
}

impl ClientConfig {
    /// # Errors
    /// [`ConfigError::ValidationError`] if `base_url` is not an absolute http(s) URL.
    pub fn new(token: impl Into<RedactedToken>, base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            token: token.into(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Token with the default base URL.
    pub fn with_token(token: impl Into<RedactedToken>) -> Result<Self, ConfigError> {
        Self::new(token, DEFAULT_BASE_URL)
    }

    pub fn token(&self) -> &RedactedToken {
        &self.token
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL as shown to users, without the trailing slash.
    pub fn display_base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn masked_token(&self) -> String {
        self.token.masked()
    }

    /// Resolve from the process environment and the detected config directory.
    pub fn load(options: ConfigOptions) -> Result<Self, ConfigError> {
        Self::resolve(options, &EnvSnapshot::from_process(), ConfigPaths::detect)
    }

    /// Resolve from explicit inputs.
    ///
    /// `paths` is only invoked when neither `options` nor `env` carries a token.
    pub fn resolve<F>(options: ConfigOptions, env: &EnvSnapshot, paths: F) -> Result<Self, ConfigError>
    where
        F: FnOnce() -> Result<ConfigPaths, ConfigError>,
    {
        let base_url_override = non_empty(options.base_url)
            .map(|url| (url, "explicit options"))
            .or_else(|| non_empty(env.base_url.clone()).map(|url| (url, "environment")));

        let token_override = non_empty(options.token)
            .map(|token| (token, "explicit options"))
            .or_else(|| non_empty(env.token.clone()).map(|token| (token, "environment")));

        if let Some((token, token_source)) = token_override {
            debug!("Using token from {token_source}, config file not read");

            let base_url = match base_url_override {
                Some((url, source)) => {
                    debug!("Using base URL from {source}");
                    url
                }
                None => DEFAULT_BASE_URL.to_string(),
            };

            return Self::new(token, &base_url);
        }

        let file = ConfigFile::load(&paths()?)?.unwrap_or_default();

        let token = non_empty(file.token).unwrap_or_default();
        if token.is_empty() {
            info!("No API token configured");
        } else {
            debug!("Using token from config file");
        }

        let base_url = match base_url_override {
            Some((url, source)) => {
                debug!("Using base URL from {source}");
                url
            }
            None => non_empty(file.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        Self::new(token, &base_url)
    }

    /// File plus defaults only; the environment is ignored.
    ///
    /// Used when the result will be written back, so environment values are
    /// never persisted.
    pub fn from_file(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(paths)?.unwrap_or_default();

        let token = non_empty(file.token).unwrap_or_default();
        let base_url = non_empty(file.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(token, &base_url)
    }

    pub fn set_token(&mut self, token: impl Into<RedactedToken>) {
        self.token = token.into();
    }

    pub fn set_base_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.base_url = parse_base_url(raw)?;
        Ok(())
    }

    /// Write token and base URL to `{config_dir}/config.json`.
    pub fn save(&self, paths: &ConfigPaths) -> Result<(), ConfigError> {
        let file = ConfigFile {
            token: Some(self.token.as_str().to_string()).filter(|t| !t.is_empty()),
            base_url: Some(self.display_base_url().to_string()),
        };

        file.save(paths)
    }
}
