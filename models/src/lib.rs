//! Domain models for the DigitalOcean API.
//!
//! This crate contains pure data structures mirroring the REST v2 JSON schema.
//! Models have no I/O - they're just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Resource structs, response envelopes, request DTOs
//! - **do-client**: Config resolution and HTTP operating on models
//! - **do-cli**: Command-line front end wiring everything together
//!
//! Fields the API may omit default to their empty value on decode. No local
//! validation is performed beyond required-field presence on requests; the
//! server is the authority.

pub mod account;
pub mod action;
pub mod create_droplet;
pub mod droplet;
pub mod envelope;
pub mod error;
pub mod image;
pub mod region;
pub mod size;

#[cfg(test)]
mod tests;

pub use account::{Account, Team};
pub use action::{Action, DropletActionKind, DropletActionRequest};
pub use create_droplet::builder::CreateDropletRequestBuilder;
pub use create_droplet::{CreateDropletRequest, ImageRef};
pub use droplet::{Droplet, DropletFilter, Kernel, NetworkV4, NetworkV6, Networks};
pub use envelope::{ErrorDetail, ErrorResponse, Links, Meta, Pages};
pub use error::model_error::ModelError;
pub use image::{Image, ImageFilter};
pub use region::Region;
pub use size::Size;
