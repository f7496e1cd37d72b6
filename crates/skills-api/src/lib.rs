//! # skills-api
//!
//! HTTP API server for the Skills Builder icon catalog.
//!
//! # Routes
//!
//! ```text
//! ┌────────────────────┬──────────────────────────────────────────────┐
//! │ GET /api/icons/all │ structured catalog, forwarded in order       │
//! │ GET /api/icons     │ legacy redirect, or scraped + sorted listing │
//! │ GET /api/icons/    │ legacy redirect                              │
//! │ GET /health        │ server status                                │
//! └────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use skills_api::{AppConfig, Server};
//!
//! let config = AppConfig::load(None)?;
//! Server::new(config)?.serve().await?;
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod health;
pub mod redirect;
pub mod routes;
pub mod server;

pub use config::{AppConfig, IconsRoute, RedirectConfig, ServerConfig};
pub use error::ApiError;
pub use health::HealthResponse;
pub use redirect::{RedirectPolicy, legacy_target};
pub use routes::{AppState, router};
pub use server::Server;
