use crate::client::DigitalOceanClient;
use crate::error::client::ClientError;

use models::Account;
use models::envelope::AccountEnvelope;

const ACCOUNT_PATH: &str = "/v2/account";

impl DigitalOceanClient {
    /// `GET /v2/account`
    pub async fn get_account(&self) -> Result<Account, ClientError> {
        let envelope: AccountEnvelope = self.get(ACCOUNT_PATH, &[]).await?;
        Ok(envelope.account)
    }
}
