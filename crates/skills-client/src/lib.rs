//! # skills-client
//!
//! Upstream client and catalog acquisition strategies.
//!
//! This crate talks to the third-party icon service and turns its answers
//! into icon lists:
//! - [`UpstreamClient`]: outbound fetches for the README, SVG assets and
//!   the structured catalog
//! - [`IconSource`] / [`CatalogSource`]: the narrow interfaces handlers
//!   depend on
//! - [`ScrapingSource`]: README table + per-icon SVG title resolution
//! - [`DelegatingSource`]: structured catalog passthrough
//!
//! # Example
//!
//! ```rust,ignore
//! use skills_client::{CatalogSource, DelegatingSource, UpstreamClient, UpstreamConfig};
//!
//! let client = UpstreamClient::new(UpstreamConfig::default())?;
//! let entries = DelegatingSource::new(client).list_entries().await?;
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod source;

pub use client::UpstreamClient;
pub use config::{AssetFailurePolicy, UpstreamConfig};
pub use source::{CatalogSource, DelegatingSource, IconSource, ScrapingSource};
