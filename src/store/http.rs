use crate::models::Property;
use crate::store::error::StoreError;
use crate::store::traits::PropertyStore;
use crate::store::types::StoreConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

/// Property store reached over its REST endpoint
pub struct HttpPropertyStore {
    client: Client,
    base_url: Url,
}

impl HttpPropertyStore {
    /// Create a store client against the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store client with custom connection settings
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid property store URL: {}", config.base_url))?;

        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> Result<Url, StoreError> {
        self.url_with(&["properties"])
    }

    fn record_url(&self, id: &str) -> Result<Url, StoreError> {
        self.url_with(&["properties", id])
    }

    // Segments are percent-encoded, so an id can never escape its path segment
    fn url_with(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl PropertyStore for HttpPropertyStore {
    async fn fetch_all(&self) -> Result<Vec<Property>, StoreError> {
        let url = self.collection_url()?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Property store returned status: {}", status);
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(StoreError::Transport)?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let properties: Vec<Property> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
        info!("Fetched {} properties from {}", properties.len(), self.source_name());

        Ok(properties)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.record_url(id)?;
        debug!("Deleting URL: {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Delete of {} rejected with status: {}", id, status);
            return Err(StoreError::Status {
                status: status.as_u16(),
            });
        }

        info!("Deleted property {}", id);
        Ok(())
    }

    fn source_name(&self) -> &str {
        self.base_url.host_str().unwrap_or("property store")
    }
}
