use serde::{Deserialize, Serialize};

/// A distribution, application, snapshot or backup image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub image_type: String,
    #[serde(default)]
    pub distribution: String,
    /// Private images (snapshots, backups) have no slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub min_disk_size: u32,
    #[serde(default)]
    pub size_gigabytes: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: String,
}

/// Query filters for `GET /v2/images`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilter {
    /// `distribution` or `application`.
    pub image_type: Option<String>,
    /// Restrict to the account's own images.
    pub private: bool,
}

impl ImageFilter {
    /// Query pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(image_type) = &self.image_type {
            pairs.push(("type", image_type.clone()));
        }
        if self.private {
            pairs.push(("private", String::from("true")));
        }
        pairs
    }
}
