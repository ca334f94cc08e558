use crate::client::DigitalOceanClient;
use crate::error::client::ClientError;

use models::envelope::{ActionEnvelope, DropletEnvelope, DropletsEnvelope, EmptyResponse};
use models::{
    Action, CreateDropletRequest, Droplet, DropletActionKind, DropletActionRequest, DropletFilter,
};

use log::info;

const DROPLETS_PATH: &str = "/v2/droplets";

fn droplet_path(id: u64) -> String {
    format!("{DROPLETS_PATH}/{id}")
}

impl DigitalOceanClient {
    /// `GET /v2/droplets`, in server order.
    ///
    /// `filter` adds `tag_name`, `page` and `per_page` when set.
    pub async fn list_droplets(&self, filter: &DropletFilter) -> Result<Vec<Droplet>, ClientError> {
        let envelope: DropletsEnvelope = self.get(DROPLETS_PATH, &filter.query_pairs()).await?;
        Ok(envelope.droplets)
    }

    /// `GET /v2/droplets/{id}`.
    ///
    /// An unknown id yields [`ClientError::Api`] with status 404
    /// ([`ClientError::is_not_found`]).
    pub async fn get_droplet(&self, id: u64) -> Result<Droplet, ClientError> {
        let envelope: DropletEnvelope = self.get(&droplet_path(id), &[]).await?;
        Ok(envelope.droplet)
    }

    pub async fn create_droplet(
        &self,
        request: &CreateDropletRequest,
    ) -> Result<Droplet, ClientError> {
        let envelope: DropletEnvelope = self.post(DROPLETS_PATH, request).await?;

        info!("Created droplet {} ({})", envelope.droplet.id, envelope.droplet.name);
        Ok(envelope.droplet)
    }

    pub async fn delete_droplet(&self, id: u64) -> Result<(), ClientError> {
        let _: EmptyResponse = self.delete(&droplet_path(id)).await?;

        info!("Deleted droplet {id}");
        Ok(())
    }

    pub async fn reboot_droplet(&self, id: u64) -> Result<Action, ClientError> {
        self.droplet_action(id, DropletActionKind::Reboot).await
    }

    pub async fn power_off_droplet(&self, id: u64) -> Result<Action, ClientError> {
        self.droplet_action(id, DropletActionKind::PowerOff).await
    }

    pub async fn power_on_droplet(&self, id: u64) -> Result<Action, ClientError> {
        self.droplet_action(id, DropletActionKind::PowerOn).await
    }

    /// `POST /v2/droplets/{id}/actions` with `{"type": <kind>}`.
    async fn droplet_action(
        &self,
        id: u64,
        kind: DropletActionKind,
    ) -> Result<Action, ClientError> {
        let path = format!("{}/actions", droplet_path(id));
        let body = DropletActionRequest::from(kind);

        let envelope: ActionEnvelope = self.post(&path, &body).await?;

        info!("Requested {} for droplet {id}", kind.describe());
        Ok(envelope.action)
    }
}
