use async_trait::async_trait;
use skills_core::{CatalogEntry, CatalogPayload, Result};

use super::CatalogSource;
use crate::UpstreamClient;

/// Forwards the upstream structured catalog unchanged.
///
/// No sorting and no validation: the order the upstream returns is the
/// order clients see, and every entry keeps the fields and values it
/// arrived with.
#[derive(Clone, Debug)]
pub struct DelegatingSource {
    client: UpstreamClient,
}

impl DelegatingSource {
    /// Create a delegating source backed by `client`.
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSource for DelegatingSource {
    fn name(&self) -> &'static str {
        "delegating"
    }

    async fn list_entries(&self) -> Result<Vec<CatalogEntry>> {
        let payload = self.client.fetch_catalog().await?;

        if let CatalogPayload::Envelope(envelope) = &payload
            && !envelope.is_success()
        {
            tracing::warn!(
                status_code = envelope.status_code,
                status_message = %envelope.status_message,
                "Catalog envelope reports a non-success status; forwarding data anyway"
            );
        }

        let entries = payload.into_entries();
        tracing::debug!(count = entries.len(), "Catalog forwarded");
        Ok(entries)
    }
}
