use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating, reading, writing or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Directory Not Found Error: {reason} {location}")]
    DirectoryNotFound {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Serialization Error: {reason} {location}")]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            location: ErrorLocation::caller(),
            reason: reason.into(),
        }
    }

    /// The message without location, suitable for `Error: ...` output.
    pub fn message(&self) -> String {
        match self {
            ConfigError::ReadError { path, source, .. } => {
                format!("Failed to read config file {}: {source}", path.display())
            }
            ConfigError::ParseError { path, reason, .. } => {
                format!("Failed to parse config file {}: {reason}", path.display())
            }
            ConfigError::WriteError { path, source, .. } => {
                format!("Failed to write config file {}: {source}", path.display())
            }
            ConfigError::DirectoryNotFound { reason, .. } => reason.clone(),
            ConfigError::SerializeError { reason, .. } => {
                format!("Failed to serialize config: {reason}")
            }
            ConfigError::ValidationError { reason, .. } => reason.clone(),
        }
    }
}
