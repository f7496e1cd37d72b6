//! Router and icon handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use skills_client::{CatalogSource, DelegatingSource, IconSource, ScrapingSource, UpstreamClient};
use skills_core::{CatalogEntry, IconRecord};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, IconsRoute};
use crate::error::ApiError;
use crate::health::handle_health;
use crate::redirect::{RedirectPolicy, legacy_redirect};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Source behind `GET /api/icons/all`.
    pub catalog: Arc<dyn CatalogSource>,
    /// Source behind `GET /api/icons` in listing mode.
    pub listing: Arc<dyn IconSource>,
    /// What `GET /api/icons` does.
    pub icons_route: IconsRoute,
    /// How the redirect shim renders missing parameters.
    pub redirect_policy: RedirectPolicy,
    /// Name reported by `/health`.
    pub server_name: Arc<str>,
}

impl AppState {
    /// Wire the production sources from configuration.
    ///
    /// Both strategies share one upstream client and its connection pool.
    pub fn from_config(config: &AppConfig) -> skills_core::Result<Self> {
        let client = UpstreamClient::new(config.upstream.clone())?;
        Ok(Self {
            catalog: Arc::new(DelegatingSource::new(client.clone())),
            listing: Arc::new(ScrapingSource::new(client)),
            icons_route: config.server.icons_route,
            redirect_policy: config.redirect.policy,
            server_name: Arc::from(config.server.name.as_str()),
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let icons = match state.icons_route {
        IconsRoute::Redirect => get(legacy_redirect),
        IconsRoute::Listing => get(list_icons),
    };

    Router::new()
        .route("/api/icons/all", get(all_icons))
        .route("/api/icons", icons)
        .route("/api/icons/", get(legacy_redirect))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/icons/all`: structured catalog, forwarded in upstream order.
async fn all_icons(State(state): State<AppState>) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let entries = state.catalog.list_entries().await?;
    tracing::info!(source = state.catalog.name(), count = entries.len(), "Served catalog");
    Ok(Json(entries))
}

/// `GET /api/icons` in listing mode: scraped catalog, sorted by id.
async fn list_icons(State(state): State<AppState>) -> Result<Json<Vec<IconRecord>>, ApiError> {
    let icons = state.listing.list_icons().await?;
    tracing::info!(source = state.listing.name(), count = icons.len(), "Served icon list");
    Ok(Json(icons))
}
