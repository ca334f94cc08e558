use crate::{Image, Region, Size};

use serde::{Deserialize, Serialize};

const PUBLIC_NETWORK_TYPE: &str = "public";

/// A droplet (virtual machine) snapshot as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    /// Memory in MB.
    #[serde(default)]
    pub memory: u32,
    #[serde(default)]
    pub vcpus: u32,
    /// Disk in GB.
    #[serde(default)]
    pub disk: u32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<Kernel>,
    /// ISO 8601 timestamp, kept verbatim.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub backup_ids: Vec<u64>,
    #[serde(default)]
    pub snapshot_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default)]
    pub size_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Networks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Server order is preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub vpc_uuid: String,
}

impl Droplet {
    /// First public IPv4 address, if the droplet has one.
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks.as_ref().and_then(|networks| {
            networks
                .v4
                .iter()
                .find(|net| net.network_type == PUBLIC_NETWORK_TYPE)
                .map(|net| net.ip_address.as_str())
        })
    }

    pub fn region_slug(&self) -> Option<&str> {
        self.region.as_ref().map(|region| region.slug.as_str())
    }

    /// Date part (`YYYY-MM-DD`) of `created_at`.
    pub fn created_date(&self) -> &str {
        self.created_at
            .split_once('T')
            .map_or(self.created_at.as_str(), |(date, _)| date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernel {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    /// `public` or `private`.
    #[serde(rename = "type")]
    pub network_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    /// Prefix length.
    #[serde(default)]
    pub netmask: u32,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: String,
}

/// Query filters for `GET /v2/droplets`.
///
/// The default sends no query string and the server applies its own paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropletFilter {
    /// Only droplets carrying this tag (`tag_name`).
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl DropletFilter {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.trim().is_empty()) {
            pairs.push(("tag_name", tag.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}
