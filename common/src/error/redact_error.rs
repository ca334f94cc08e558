use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RedactError {
    /// A redacted value reached a serde serializer.
    #[error("Redaction Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
