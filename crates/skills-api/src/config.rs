//! Server configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! environment overrides.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3000"
//! name = "skills-builder"
//! icons_route = "redirect"
//!
//! [redirect]
//! policy = "preserve-undefined"
//!
//! [upstream]
//! max_concurrent_fetches = 8
//! asset_failure = "strict"
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skills_client::{AssetFailurePolicy, UpstreamConfig};
use skills_core::{Error, Result};

use crate::redirect::RedirectPolicy;

/// Environment variable overriding [`ServerConfig::bind`].
pub const ENV_BIND: &str = "SKILLS_BIND";
/// Environment variable overriding [`ServerConfig::icons_route`].
pub const ENV_ICONS_ROUTE: &str = "SKILLS_ICONS_ROUTE";
/// Environment variable overriding [`RedirectConfig::policy`].
pub const ENV_REDIRECT_POLICY: &str = "SKILLS_REDIRECT_POLICY";
/// Environment variable overriding [`UpstreamConfig::asset_failure`].
pub const ENV_ASSET_FAILURE: &str = "SKILLS_ASSET_FAILURE";

/// What `GET /api/icons` serves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconsRoute {
    /// Legacy redirect to the builder page.
    #[default]
    Redirect,
    /// Scraped catalog, sorted by id.
    Listing,
}

impl fmt::Display for IconsRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect => write!(f, "redirect"),
            Self::Listing => write!(f, "listing"),
        }
    }
}

impl FromStr for IconsRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "redirect" => Ok(Self::Redirect),
            "listing" => Ok(Self::Listing),
            other => Err(Error::config(format!(
                "unknown icons route '{other}' (expected 'redirect' or 'listing')"
            ))),
        }
    }
}

/// HTTP server settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// Name reported by `/health`.
    pub name: String,
    /// Behavior of `GET /api/icons`.
    pub icons_route: IconsRoute,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            name: "skills-builder".to_string(),
            icons_route: IconsRoute::default(),
        }
    }
}

/// Legacy redirect settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// How missing query parameters are rendered.
    pub policy: RedirectPolicy,
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Legacy redirect settings.
    pub redirect: RedirectConfig,
    /// Upstream icon service settings.
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Render as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply environment overrides, reading variables through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind
                .parse()
                .map_err(|e| Error::config(format!("{ENV_BIND}='{bind}': {e}")))?;
        }
        if let Some(route) = lookup(ENV_ICONS_ROUTE) {
            self.server.icons_route = route.parse()?;
        }
        if let Some(policy) = lookup(ENV_REDIRECT_POLICY) {
            self.redirect.policy = policy.parse()?;
        }
        if let Some(policy) = lookup(ENV_ASSET_FAILURE) {
            self.upstream.asset_failure = policy.parse::<AssetFailurePolicy>()?;
        }
        Ok(())
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server.name must not be empty"));
        }
        self.upstream.validate()
    }
}
