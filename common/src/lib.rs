//! Shared building blocks for the DigitalOcean client workspace.
//!
//! Everything here is used by more than one crate:
//!
//! - **ErrorLocation**: file/line/column captured via `#[track_caller]` and
//!   embedded in every error variant across the workspace
//! - **HttpStatusCode**: numeric status stored on API errors
//! - **RedactedToken**: the API token wrapper that only ever displays its
//!   masked form

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::{RedactedToken, TOKEN_NOT_SET, TOKEN_SHORT_MASK, mask_token};
