//! Icon records and the shapes the upstream catalog arrives in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single icon in the catalog, as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Stable slug; sort key and asset path segment.
    pub id: String,
    /// Human-readable label. Falls back to `id` when no title is known.
    pub name: String,
    /// Fully-qualified address of the SVG asset.
    pub url: String,
}

impl IconRecord {
    /// Create a new icon record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One entry of the structured upstream catalog.
///
/// Entries are forwarded as received: unknown fields, `null`
/// values and missing keys all survive. Usually shaped like an
/// [`IconRecord`], but never checked against it.
pub type CatalogEntry = Value;

/// Status envelope wrapping the icon list on the structured upstream API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Upstream status code (mirrors the HTTP status in practice).
    pub status_code: u16,
    /// Upstream status message.
    #[serde(default)]
    pub status_message: String,
    /// The icon list.
    pub data: Vec<CatalogEntry>,
}

impl ResponseEnvelope {
    /// Whether the envelope reports a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Catalog body as served by the structured upstream endpoint.
///
/// Older deployments answer with a bare array, newer ones wrap it in a
/// [`ResponseEnvelope`]. Both decode into this type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    /// `{ statusCode, statusMessage, data: [...] }`
    Envelope(ResponseEnvelope),
    /// `[...]`
    Bare(Vec<CatalogEntry>),
}

impl CatalogPayload {
    /// Take the entries out of the payload, preserving upstream order.
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            Self::Envelope(envelope) => envelope.data,
            Self::Bare(entries) => entries,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
