//! Error types for API calls.
//!
//! Key design decisions:
//! - HTTP status codes stored directly (not parsed from strings)
//! - The structured error list from the API body is kept when present
//! - `message()` gives the bare user-facing text; `Display` adds kind and location
//! - `#[track_caller]` for automatic location capture

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};
use models::{ErrorDetail, ErrorResponse};

use log::debug;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    /// No token configured, or the API answered 401.
    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    /// Any other non-2xx response.
    #[error("API Error: HTTP {status} - {message} {location}")]
    Api {
        message: String,
        status: HttpStatusCode,
        errors: Option<Vec<ErrorDetail>>,
        location: ErrorLocation,
    },

    /// 2xx response whose body is not the expected JSON.
    #[error("Invalid Response Error: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    /// Transport-level failure (connect, TLS, body read).
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Request body could not be serialized.
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl ClientError {
    #[track_caller]
    pub fn missing_token() -> Self {
        ClientError::Authentication {
            message: String::from("Authentication token is required"),
            status: None,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Classify a non-2xx response.
    ///
    /// If the body is an API error envelope with at least one entry, the first
    /// entry's message is used and the whole list is kept. Otherwise the message
    /// is `HTTP <status>: <reason>`. A 401 becomes [`ClientError::Authentication`].
    #[track_caller]
    pub fn from_response(status: HttpStatusCode, reason: &str, body: &str) -> Self {
        let location = ErrorLocation::caller();

        let (message, errors) = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) if !response.errors.is_empty() => {
                (response.errors[0].message.clone(), Some(response.errors))
            }
            _ => (format!("HTTP {status}: {reason}"), None),
        };

        debug!("API request failed with HTTP {status}: {message}");

        if status.is_unauthorized() {
            return ClientError::Authentication {
                message,
                status: Some(status),
                location,
            };
        }

        ClientError::Api {
            message,
            status,
            errors,
            location,
        }
    }

    /// The message without kind or location, suitable for `Error: ...` output.
    pub fn message(&self) -> String {
        match self {
            ClientError::Authentication { message, .. }
            | ClientError::Api { message, .. }
            | ClientError::InvalidResponse { message, .. }
            | ClientError::Http { message, .. }
            | ClientError::UrlParse { message, .. }
            | ClientError::Json { message, .. } => message.clone(),
            ClientError::Configuration(error) => error.message(),
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ClientError::Authentication { status, .. } => *status,
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured error entries from the API body, if it had any.
    pub fn errors(&self) -> Option<&[ErrorDetail]> {
        match self {
            ClientError::Api { errors, .. } => errors.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status().is_some_and(|status| status.is_not_found())
    }
}

impl From<url::ParseError> for ClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
