use serde::{Deserialize, Serialize};

/// The authenticated user's account, as returned by `GET /v2/account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub uuid: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub droplet_limit: u32,
    #[serde(default)]
    pub floating_ip_limit: u32,
    #[serde(default)]
    pub volume_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub uuid: String,
    pub name: String,
}
