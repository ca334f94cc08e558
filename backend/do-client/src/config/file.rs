//! On-disk config file: `{ "token": "...", "base_url": "..." }` as JSON or YAML.

use crate::config::paths::ConfigPaths;
use crate::error::config::ConfigError;

use common::{ErrorLocation, mask_token};

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, alias = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("token", &self.token.as_deref().map(mask_token))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ConfigFile {
    /// Read the first existing config file.
    ///
    /// Returns `Ok(None)` when no candidate file exists. An empty file yields
    /// the default (all fields absent).
    ///
    /// # Errors
    /// [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid JSON/YAML of this shape.
    pub fn load(paths: &ConfigPaths) -> Result<Option<Self>, ConfigError> {
        let Some(path) = paths.existing_file() else {
            debug!("No config file in {}", paths.config_dir.display());
            return Ok(None);
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: path.clone(),
                source: e,
            }
        })?;

        let file = Self::parse(&path, &contents)?;

        info!("Config loaded from {}", path.display());
        Ok(Some(file))
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml");

        let parsed = if is_yaml {
            serde_yaml::from_str::<Self>(contents).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<Self>(contents).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| {
            warn!("Failed to parse config file {}: {}", path.display(), reason);
            ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                reason,
            }
        })
    }

    /// Save to `{config_dir}/config.json` using temp file + rename.
    ///
    /// Overwrites the whole file; no merge with what was there. On Unix the
    /// file is owner-only (`0600`) since it holds the token.
    pub fn save(&self, paths: &ConfigPaths) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&paths.config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: paths.config_dir.clone(),
            source: e,
        })?;

        let config_path = paths.json_file();
        let temp_path = config_path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })?;

        open_private(&temp_path)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .map_err(|e| ConfigError::WriteError {
                location: ErrorLocation::caller(),
                path: temp_path.clone(),
                source: e,
            })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }
}

/// Create or truncate `path` for writing, readable by the owner only.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::fs::Permissions;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;

    // `mode` only applies on creation; a stale temp file keeps its old bits
    file.set_permissions(Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
