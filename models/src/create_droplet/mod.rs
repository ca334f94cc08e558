pub mod builder;

use crate::CreateDropletRequestBuilder;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for `POST /v2/droplets`.
///
/// Optional fields are left out of the JSON entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDropletRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

impl CreateDropletRequest {
    pub fn builder() -> CreateDropletRequestBuilder {
        CreateDropletRequestBuilder::default()
    }
}

/// An image given either by numeric id or by slug.
///
/// Serializes as a bare JSON number or string, which is what the API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Id(u64),
    Slug(String),
}

impl ImageRef {
    pub fn is_empty(&self) -> bool {
        matches!(self, ImageRef::Slug(slug) if slug.is_empty())
    }
}

impl From<&str> for ImageRef {
    /// All-digit input is treated as an image id, anything else as a slug.
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(id) => ImageRef::Id(id),
            Err(_) => ImageRef::Slug(value.to_string()),
        }
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        ImageRef::from(value.as_str())
    }
}

impl From<u64> for ImageRef {
    fn from(id: u64) -> Self {
        ImageRef::Id(id)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Id(id) => write!(f, "{id}"),
            ImageRef::Slug(slug) => f.write_str(slug),
        }
    }
}
