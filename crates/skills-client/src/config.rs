//! Upstream endpoint configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use skills_core::{Error, Result};

/// Placeholder substituted with the icon id in [`UpstreamConfig::asset_url_template`].
pub const ID_PLACEHOLDER: &str = "{id}";

/// Default README document listing the icons.
pub const DEFAULT_README_URL: &str = "https://skills.syvixor.com/api/readme";

/// Default SVG asset location.
pub const DEFAULT_ASSET_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/syvixor/skills-icons/refs/heads/main/icons/{id}.svg";

/// Default structured catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://skills.syvixor.com/api/icons/all";

/// What the scraping strategy does when a single SVG asset cannot be
/// fetched or parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetFailurePolicy {
    /// Fail the whole listing with the first asset error.
    #[default]
    Strict,
    /// Leave the icon out and log a warning.
    Lenient,
}

impl fmt::Display for AssetFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for AssetFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(Error::config(format!(
                "unknown asset failure policy '{other}' (expected 'strict' or 'lenient')"
            ))),
        }
    }
}

/// Configuration for [`UpstreamClient`](crate::UpstreamClient).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Markdown README listing the icons (scraping strategy).
    pub readme_url: String,
    /// SVG asset URL with an `{id}` placeholder (scraping strategy).
    pub asset_url_template: String,
    /// Structured catalog endpoint (delegation strategy).
    pub catalog_url: String,
    /// Upper bound on concurrent SVG fetches per listing.
    pub max_concurrent_fetches: usize,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
    /// `User-Agent` header sent upstream.
    pub user_agent: String,
    /// Behavior when one SVG asset fails.
    pub asset_failure: AssetFailurePolicy,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            readme_url: DEFAULT_README_URL.to_string(),
            asset_url_template: DEFAULT_ASSET_URL_TEMPLATE.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            max_concurrent_fetches: 8,
            request_timeout_secs: Some(30),
            user_agent: concat!("skills-builder/", env!("CARGO_PKG_VERSION")).to_string(),
            asset_failure: AssetFailurePolicy::default(),
        }
    }
}

impl UpstreamConfig {
    /// Point every endpoint at `base_url`, keeping the upstream path layout.
    ///
    /// Used to aim the client at a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            readme_url: format!("{base}/api/readme"),
            asset_url_template: format!("{base}/icons/{ID_PLACEHOLDER}.svg"),
            catalog_url: format!("{base}/api/icons/all"),
            ..Self::default()
        }
    }

    /// Set the asset failure policy.
    pub fn with_asset_failure(mut self, policy: AssetFailurePolicy) -> Self {
        self.asset_failure = policy;
        self
    }

    /// Set the fan-out limit.
    pub fn with_max_concurrent_fetches(mut self, limit: usize) -> Self {
        self.max_concurrent_fetches = limit;
        self
    }

    /// Fan-out limit, never below one.
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Build the SVG asset URL for an icon id.
    pub fn asset_url(&self, id: &str) -> String {
        self.asset_url_template.replace(ID_PLACEHOLDER, id)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.asset_url_template.contains(ID_PLACEHOLDER) {
            return Err(Error::config(format!(
                "asset_url_template must contain {ID_PLACEHOLDER}: '{}'",
                self.asset_url_template
            )));
        }
        for (field, url) in [
            ("readme_url", &self.readme_url),
            ("catalog_url", &self.catalog_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config(format!(
                    "{field} must be an http(s) URL: '{url}'"
                )));
            }
        }
        Ok(())
    }
}
