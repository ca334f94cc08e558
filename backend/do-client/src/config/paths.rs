//! Location of the per-user config directory.
//!
//! Lookup order:
//! 1. `DO_CLI_CONFIG_DIR` environment variable (explicit override)
//! 2. `~/.config/do-cli` via the `dirs` crate
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::CONFIG_DIR_ENV_VAR;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

const APP_DIR_NAME: &str = "do-cli";

pub const JSON_FILE_NAME: &str = "config.json";
pub const YML_FILE_NAME: &str = "config.yml";
pub const YAML_FILE_NAME: &str = "config.yaml";

/// Config directory detection result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Directory holding `config.json` / `config.yml` / `config.yaml`.
    pub config_dir: PathBuf,
    /// How the path was determined.
    pub source: PathSource,
}

/// How the path was determined (for debugging/logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Set via `DO_CLI_CONFIG_DIR`.
    EnvVar,
    /// `~/.config/do-cli` under the user's home directory.
    HomeDefault,
    /// Supplied directly by the caller.
    Explicit,
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{CONFIG_DIR_ENV_VAR}"),
            PathSource::HomeDefault => write!(f, "home default"),
            PathSource::Explicit => write!(f, "explicit"),
        }
    }
}

impl ConfigPaths {
    /// Detect the config directory from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::DirectoryNotFound`] if the override is unset and
    /// no home directory can be determined.
    pub fn detect() -> Result<Self, ConfigError> {
        Self::detect_from(env::var(CONFIG_DIR_ENV_VAR).ok().as_deref())
    }

    /// Same as [`ConfigPaths::detect`] with the override value passed in.
    pub fn detect_from(dir_override: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(custom_dir) = dir_override.filter(|dir| !dir.trim().is_empty()) {
            let config_dir = PathBuf::from(custom_dir);

            info!("Using {CONFIG_DIR_ENV_VAR} override: {:?}", config_dir);

            return Ok(Self {
                config_dir,
                source: PathSource::EnvVar,
            });
        }

        if let Some(home) = dirs::home_dir() {
            let config_dir = home.join(".config").join(APP_DIR_NAME);

            debug!("Config dir: {:?}", config_dir);

            return Ok(Self {
                config_dir,
                source: PathSource::HomeDefault,
            });
        }

        Err(ConfigError::DirectoryNotFound {
            location: ErrorLocation::caller(),
            reason: format!(
                "Cannot determine home directory. Set {CONFIG_DIR_ENV_VAR} environment variable."
            ),
        })
    }

    pub fn from_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            source: PathSource::Explicit,
        }
    }

    /// The file `save()` writes to.
    pub fn json_file(&self) -> PathBuf {
        self.config_dir.join(JSON_FILE_NAME)
    }

    /// Candidate files in read order.
    pub fn candidates(&self) -> [PathBuf; 3] {
        [
            self.config_dir.join(JSON_FILE_NAME),
            self.config_dir.join(YML_FILE_NAME),
            self.config_dir.join(YAML_FILE_NAME),
        ]
    }

    /// First candidate that exists on disk.
    pub fn existing_file(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|path| path.is_file())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
