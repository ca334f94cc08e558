use serde::{Deserialize, Serialize};

/// A droplet size plan (e.g. `s-1vcpu-1gb`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub slug: String,
    /// Memory in MB.
    #[serde(default)]
    pub memory: u32,
    #[serde(default)]
    pub vcpus: u32,
    /// Disk in GB.
    #[serde(default)]
    pub disk: u32,
    /// Monthly transfer allowance in TB.
    #[serde(default)]
    pub transfer: f64,
    #[serde(default)]
    pub price_monthly: f64,
    #[serde(default)]
    pub price_hourly: f64,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub description: String,
}
