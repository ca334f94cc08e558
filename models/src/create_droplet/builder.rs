use crate::error::model_error::ModelError;
use crate::{CreateDropletRequest, ImageRef};

use common::ErrorLocation;

/// Builder for [`CreateDropletRequest`].
///
/// `build()` only checks that the four required fields are present and
/// non-empty. Whether a region/size/image combination is valid is left to the
/// API.
#[derive(Debug, Default)]
pub struct CreateDropletRequestBuilder {
    name: Option<String>,
    region: Option<String>,
    size: Option<String>,
    image: Option<ImageRef>,
    ssh_keys: Vec<String>,
    backups: Option<bool>,
    ipv6: Option<bool>,
    monitoring: Option<bool>,
    tags: Vec<String>,
    user_data: Option<String>,
    vpc_uuid: Option<String>,
}

impl CreateDropletRequestBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<ImageRef>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_ssh_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ssh_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.backups = Some(enabled);
        self
    }

    pub fn with_ipv6(mut self, enabled: bool) -> Self {
        self.ipv6 = Some(enabled);
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitoring = Some(enabled);
        self
    }

    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    pub fn with_vpc_uuid(mut self, vpc_uuid: impl Into<String>) -> Self {
        self.vpc_uuid = Some(vpc_uuid.into());
        self
    }

    /// Build the request, rejecting missing or empty required fields.
    #[track_caller]
    pub fn build(self) -> Result<CreateDropletRequest, ModelError> {
        let name = required(self.name, "Name")?;
        let region = required(self.region, "Region")?;
        let size = required(self.size, "Size")?;

        let image = self.image.ok_or_else(|| ModelError::Validation {
            message: String::from("Image is required"),
            location: ErrorLocation::caller(),
        })?;

        if image.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Image cannot be empty"),
                location: ErrorLocation::caller(),
            });
        }

        Ok(CreateDropletRequest {
            name,
            region,
            size,
            image,
            ssh_keys: non_empty(self.ssh_keys),
            backups: self.backups,
            ipv6: self.ipv6,
            monitoring: self.monitoring,
            tags: non_empty(self.tags),
            user_data: self.user_data,
            vpc_uuid: self.vpc_uuid,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> Result<String, ModelError> {
    match value {
        None => Err(ModelError::Validation {
            message: format!("{field} is required"),
            location: ErrorLocation::caller(),
        }),
        Some(value) if value.trim().is_empty() => Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::caller(),
        }),
        Some(value) => Ok(value),
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() { None } else { Some(values) }
}
