//! HTTP request wrapper plus one typed method per endpoint.
//!
//! Endpoint groups live in their own files as separate `impl` blocks:
//! [`account`], [`droplets`], [`catalog`].

mod account;
mod catalog;
mod droplets;

use crate::USER_AGENT;
use crate::config::{ClientConfig, ConfigOptions};
use crate::error::client::ClientError;

use common::HttpStatusCode;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";
const EMPTY_JSON_OBJECT: &str = "{}";

/// DigitalOcean API v2 client.
///
/// Holds one reqwest client and an immutable [`ClientConfig`]. No retries and
/// no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct DigitalOceanClient {
    http: Client,
    config: ClientConfig,
}

impl DigitalOceanClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { http, config })
    }

    /// Resolve config from options, environment and file, then build the client.
    pub fn from_options(options: ConfigOptions) -> Result<Self, ClientError> {
        Self::new(ClientConfig::load(options)?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fail with [`ClientError::Authentication`] if no token is configured.
    ///
    /// Every request runs this first; callers can also use it to fail early
    /// before interactive steps.
    #[track_caller]
    pub fn ensure_authenticated(&self) -> Result<(), ClientError> {
        if self.config.token().is_empty() {
            return Err(ClientError::missing_token());
        }
        Ok(())
    }

    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, query, None).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body)?;
        self.request(Method::POST, path, &[], Some(bytes)).await
    }

    async fn delete<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Send one authenticated request and decode the JSON response into `T`.
    ///
    /// # Errors
    /// - [`ClientError::Authentication`] before any network I/O if the token is empty
    /// - [`ClientError::UrlParse`] if `path` cannot be joined onto the base URL
    /// - [`ClientError::Http`] on transport failure
    /// - [`ClientError::Api`] / [`ClientError::Authentication`] on non-2xx
    /// - [`ClientError::InvalidResponse`] if a 2xx body does not decode as `T`
    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.ensure_authenticated()?;
        let token = self.config.token();

        let mut url = self.config.base_url().join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(token.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("HTTP {} ({} bytes)", status.as_u16(), text.len());

        if !status.is_success() {
            return Err(ClientError::from_response(
                HttpStatusCode::from(status.as_u16()),
                status.canonical_reason().unwrap_or("Unknown Status"),
                &text,
            ));
        }

        decode_body(&text)
    }
}

/// Decode a 2xx body; empty or whitespace-only bodies decode as `{}`.
pub(crate) fn decode_body<T>(text: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let text = if text.trim().is_empty() {
        EMPTY_JSON_OBJECT
    } else {
        text
    };

    serde_json::from_str(text)
        .map_err(|e| ClientError::invalid_response(format!("Failed to decode response body: {e}")))
}
