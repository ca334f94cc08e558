use common::ErrorLocation;
use do_client::{ClientError, ConfigError};
use models::ModelError;

use thiserror::Error;

/// Everything that can end a CLI invocation with exit code 1.
///
/// Library errors pass through unchanged; the variants below cover what the
/// front end itself can get wrong.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Writing to stdout or reading the confirmation answer failed.
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Arguments parsed but make no sense (e.g. unknown config key).
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Text printed after `Error: ` on stderr.
    pub fn message(&self) -> String {
        match self {
            CliError::Client(error) => error.message(),
            CliError::Config(error) => error.message(),
            CliError::Model(error) => error.message().to_string(),
            CliError::Output { message, .. }
            | CliError::Usage { message, .. }
            | CliError::Logger { message, .. } => message.clone(),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        CliError::Output {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CliError::Output {
            message: format!("Failed to write JSON: {error}"),
            location: ErrorLocation::caller(),
        }
    }
}
