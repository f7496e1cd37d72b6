//! Outbound HTTP client for the upstream icon service.

use std::sync::Arc;

use skills_core::{CatalogPayload, Error, Result};

use crate::config::UpstreamConfig;

/// Client for the third-party icon service.
///
/// Cheap to clone: the underlying connection pool and the configuration are
/// shared.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    /// Create a client from configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// SVG asset URL for an icon id.
    pub fn asset_url(&self, id: &str) -> String {
        self.config.asset_url(id)
    }

    /// Fetch the markdown README that lists the icons.
    pub async fn fetch_readme(&self) -> Result<String> {
        self.get_text(&self.config.readme_url).await
    }

    /// Fetch the SVG asset for one icon.
    pub async fn fetch_svg(&self, id: &str) -> Result<String> {
        self.get_text(&self.asset_url(id)).await
    }

    /// Fetch and decode the structured catalog.
    pub async fn fetch_catalog(&self) -> Result<CatalogPayload> {
        let url = &self.config.catalog_url;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog payload did not decode");
            Error::malformed("catalog", e.to_string())
        })
    }

    /// GET a URL and return the body as text, failing on non-2xx.
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url = %url, "Fetching upstream");

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Upstream request failed");
            Error::upstream_with_source(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            return Err(Error::upstream_status(url, status.as_u16()));
        }

        response.text().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Upstream body could not be read");
            Error::upstream_with_source(url, e)
        })
    }
}
