use serde::{Deserialize, Serialize};

/// A datacenter region, identified by its slug (e.g. `nyc3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub available: bool,
    /// Size slugs that can be created in this region.
    #[serde(default)]
    pub sizes: Vec<String>,
}
