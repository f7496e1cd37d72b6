use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt, stream};
use skills_content::{display_name, extract_icon_ids, extract_svg_title};
use skills_core::{IconRecord, Result, sort_by_id};

use super::IconSource;
use crate::{AssetFailurePolicy, UpstreamClient};

/// Builds the catalog from the upstream README and per-icon SVG assets.
///
/// The README yields the ids. Each id's display name lives in its SVG asset,
/// so every listing costs one README fetch plus one fetch per icon, run at
/// most [`UpstreamConfig::concurrency_limit`](crate::UpstreamConfig::concurrency_limit)
/// at a time.
#[derive(Clone, Debug)]
pub struct ScrapingSource {
    client: UpstreamClient,
}

impl ScrapingSource {
    /// Create a scraping source backed by `client`.
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// Resolve icons for the given ids, honoring the asset failure policy.
    ///
    /// Output is sorted by id regardless of completion order.
    pub async fn resolve_all(&self, ids: Vec<String>) -> Result<Vec<IconRecord>> {
        let limit = self.client.config().concurrency_limit();
        let policy = self.client.config().asset_failure;
        let client = self.client.clone();

        let resolved = stream::iter(ids)
            .map(move |id| {
                let client = client.clone();
                async move { resolve_icon(&client, id).await }
            })
            .buffer_unordered(limit);

        let mut icons: Vec<IconRecord> = match policy {
            AssetFailurePolicy::Strict => resolved.try_collect().await?,
            AssetFailurePolicy::Lenient => {
                resolved
                    .filter_map(|result| async move {
                        match result {
                            Ok(icon) => Some(icon),
                            Err(e) => {
                                tracing::warn!(error = %e, "Skipping icon whose asset could not be resolved");
                                None
                            }
                        }
                    })
                    .collect()
                    .await
            }
        };

        sort_by_id(&mut icons);
        Ok(icons)
    }
}

/// Fetch one SVG asset and build the record for `id`.
async fn resolve_icon(client: &UpstreamClient, id: String) -> Result<IconRecord> {
    let url = client.asset_url(&id);
    let svg = client.fetch_svg(&id).await?;
    let title = extract_svg_title(&svg)?;
    let name = display_name(&id, title);
    Ok(IconRecord { id, name, url })
}

#[async_trait]
impl IconSource for ScrapingSource {
    fn name(&self) -> &'static str {
        "scraping"
    }

    async fn list_icons(&self) -> Result<Vec<IconRecord>> {
        let readme = self.client.fetch_readme().await?;
        let ids = extract_icon_ids(&readme);
        tracing::debug!(count = ids.len(), "Extracted icon ids from README");

        let icons = self.resolve_all(ids).await?;
        tracing::debug!(count = icons.len(), "Resolved icons");
        Ok(icons)
    }
}
