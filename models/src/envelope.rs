//! Response envelopes and the shared list/error shapes.
//!
//! The API wraps every resource under a named key (`{"droplet": {...}}`).
//! The client decodes into one of these envelopes and hands back the inner
//! value.

use crate::{Account, Action, Droplet, Image, Region, Size};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// One entry of an API error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error body: `{"errors": [{"id": ..., "message": ...}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountEnvelope {
    pub account: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DropletsEnvelope {
    pub droplets: Vec<Droplet>,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Returned by both get and create.
#[derive(Debug, Clone, Deserialize)]
pub struct DropletEnvelope {
    pub droplet: Droplet,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub actions: Option<Vec<Action>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionEnvelope {
    pub action: Action,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesEnvelope {
    pub images: Vec<Image>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionsEnvelope {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SizesEnvelope {
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Body of a successful call that returns nothing of interest (e.g. 204 on delete).
///
/// Accepts `{}` and ignores any fields a server might still send.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EmptyResponse {}
