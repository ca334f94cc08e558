//! Read-only listings: images, regions, sizes.

use crate::client::DigitalOceanClient;
use crate::error::client::ClientError;

use models::envelope::{ImagesEnvelope, RegionsEnvelope, SizesEnvelope};
use models::{Image, ImageFilter, Region, Size};

const IMAGES_PATH: &str = "/v2/images";
const REGIONS_PATH: &str = "/v2/regions";
const SIZES_PATH: &str = "/v2/sizes";

impl DigitalOceanClient {
    /// `GET /v2/images`, with `type` and `private=true` added from `filter`.
    pub async fn list_images(&self, filter: &ImageFilter) -> Result<Vec<Image>, ClientError> {
        let envelope: ImagesEnvelope = self.get(IMAGES_PATH, &filter.query_pairs()).await?;
        Ok(envelope.images)
    }

    pub async fn list_regions(&self) -> Result<Vec<Region>, ClientError> {
        let envelope: RegionsEnvelope = self.get(REGIONS_PATH, &[]).await?;
        Ok(envelope.regions)
    }

    pub async fn list_sizes(&self) -> Result<Vec<Size>, ClientError> {
        let envelope: SizesEnvelope = self.get(SIZES_PATH, &[]).await?;
        Ok(envelope.sizes)
    }
}
