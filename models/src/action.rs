use serde::{Deserialize, Serialize};

/// An asynchronous action the API started on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type", default)]
    pub action_type: String,
    #[serde(default)]
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub resource_id: u64,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_slug: Option<String>,
}

/// Power actions accepted by `POST /v2/droplets/{id}/actions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropletActionKind {
    Reboot,
    PowerOff,
    PowerOn,
}

impl DropletActionKind {
    /// Human-readable verb used in CLI output.
    pub fn describe(&self) -> &'static str {
        match self {
            DropletActionKind::Reboot => "reboot",
            DropletActionKind::PowerOff => "power off",
            DropletActionKind::PowerOn => "power on",
        }
    }
}

/// Body of a droplet action request: `{"type": "reboot"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletActionRequest {
    #[serde(rename = "type")]
    pub kind: DropletActionKind,
}

impl From<DropletActionKind> for DropletActionRequest {
    fn from(kind: DropletActionKind) -> Self {
        Self { kind }
    }
}
