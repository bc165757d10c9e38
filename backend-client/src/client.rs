use crate::error::BackendError;
use async_trait::async_trait;
use crumbline_protocol::EventIdLookup;
use crumbline_protocol::IssueLookup;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base configuration for the dashboard API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://app.crumbline.dev/api/0".to_string(),
        }
    }
}

/// The two lookups the linked-event badge needs. A trait so tests and
/// alternative transports can stand in for the HTTP client.
#[async_trait]
pub trait LinkedEventApi: Send + Sync {
    /// `GET /organizations/{org}/eventids/{event_id}/`
    async fn lookup_event_id(
        &self,
        org_slug: &str,
        event_id: &str,
    ) -> Result<EventIdLookup, BackendError>;

    /// `GET /organizations/{org}/issues/{group_id}/`
    async fn lookup_issue(
        &self,
        org_slug: &str,
        group_id: &str,
    ) -> Result<IssueLookup, BackendError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackendClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpBackendClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Shares a caller-provided `reqwest::Client` (connection pool, proxy
    /// settings) instead of building a fresh one.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        debug!(%url, "backend lookup");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound { url });
        }
        if !status.is_success() {
            return Err(BackendError::Status { status, url });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LinkedEventApi for HttpBackendClient {
    async fn lookup_event_id(
        &self,
        org_slug: &str,
        event_id: &str,
    ) -> Result<EventIdLookup, BackendError> {
        self.get_json(&format!("/organizations/{org_slug}/eventids/{event_id}/"))
            .await
    }

    async fn lookup_issue(
        &self,
        org_slug: &str,
        group_id: &str,
    ) -> Result<IssueLookup, BackendError> {
        self.get_json(&format!("/organizations/{org_slug}/issues/{group_id}/"))
            .await
    }
}
