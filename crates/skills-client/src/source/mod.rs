//! Catalog acquisition strategies.
//!
//! Handlers depend only on the traits here:
//!
//! - [`ScrapingSource`] implements [`IconSource`]: parse the README table,
//!   then resolve each icon's display name from its SVG asset. Output is
//!   typed and sorted by id.
//! - [`DelegatingSource`] implements [`CatalogSource`]: forward the
//!   structured catalog as-is, entries untouched.

mod delegating;
mod scraping;

pub use delegating::DelegatingSource;
pub use scraping::ScrapingSource;

use async_trait::async_trait;
use skills_core::{CatalogEntry, IconRecord, Result};

/// A way of producing the icon catalog.
#[async_trait]
pub trait IconSource: Send + Sync {
    /// Short strategy name, used in logs.
    fn name(&self) -> &'static str;

    /// Acquire the full icon list.
    async fn list_icons(&self) -> Result<Vec<IconRecord>>;
}

/// A way of obtaining the upstream catalog without interpreting its entries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short strategy name, used in logs.
    fn name(&self) -> &'static str;

    /// Acquire the catalog entries in upstream order.
    async fn list_entries(&self) -> Result<Vec<CatalogEntry>>;
}
