//! Health check endpoint.
//!
//! Reports server status and version. Never touches the upstream, so it
//! stays green while the icon service is down.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::routes::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
}

impl HealthResponse {
    /// A healthy response for the named server at this crate's version.
    pub fn healthy(server_name: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            server_name: server_name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// `GET /health`
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(&*state.server_name))
}
