//! Legacy redirect shim.
//!
//! Old builder links pointed at `/api/icons?perline=..&i=..` (people swapped
//! "skills" for "builder" in an icon URL). Those requests are sent to the
//! builder home page with both parameters re-attached.

use std::fmt;
use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use skills_core::Error;

use crate::error::ApiError;
use crate::routes::AppState;

/// Query parameter carrying the icons-per-line setting.
pub const PERLINE_PARAM: &str = "perline";

/// Query parameter carrying the comma-separated icon ids.
pub const ICONS_PARAM: &str = "i";

/// Rendering of a missing parameter under [`RedirectPolicy::PreserveUndefined`].
const UNDEFINED: &str = "undefined";

/// How missing query parameters appear in the redirect target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectPolicy {
    /// Keep both parameters, writing `undefined` for a missing one. This is
    /// what existing links have always received.
    #[default]
    PreserveUndefined,
    /// Drop missing parameters from the target.
    OmitMissing,
}

impl fmt::Display for RedirectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreserveUndefined => write!(f, "preserve-undefined"),
            Self::OmitMissing => write!(f, "omit-missing"),
        }
    }
}

impl FromStr for RedirectPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preserve-undefined" => Ok(Self::PreserveUndefined),
            "omit-missing" => Ok(Self::OmitMissing),
            other => Err(Error::config(format!(
                "unknown redirect policy '{other}' (expected 'preserve-undefined' or 'omit-missing')"
            ))),
        }
    }
}

/// Build the redirect target for a legacy icon-list request.
///
/// Values are attached as received, without re-encoding.
///
/// # Examples
///
/// ```
/// use skills_api::{RedirectPolicy, legacy_target};
///
/// assert_eq!(
///     legacy_target(Some("3"), Some("5"), RedirectPolicy::PreserveUndefined),
///     "/?perline=3&i=5"
/// );
/// assert_eq!(
///     legacy_target(None, None, RedirectPolicy::PreserveUndefined),
///     "/?perline=undefined&i=undefined"
/// );
/// assert_eq!(legacy_target(None, None, RedirectPolicy::OmitMissing), "/");
/// ```
pub fn legacy_target(perline: Option<&str>, icons: Option<&str>, policy: RedirectPolicy) -> String {
    match policy {
        RedirectPolicy::PreserveUndefined => format!(
            "/?{PERLINE_PARAM}={}&{ICONS_PARAM}={}",
            perline.unwrap_or(UNDEFINED),
            icons.unwrap_or(UNDEFINED)
        ),
        RedirectPolicy::OmitMissing => {
            let pairs: Vec<String> = [(PERLINE_PARAM, perline), (ICONS_PARAM, icons)]
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
                .collect();
            if pairs.is_empty() {
                "/".to_string()
            } else {
                format!("/?{}", pairs.join("&"))
            }
        }
    }
}

/// Build a `302 Found` response pointing at `target`.
pub fn found(target: &str) -> Result<Response, ApiError> {
    let location =
        HeaderValue::from_str(target).map_err(|_| ApiError::InvalidRedirect(target.to_string()))?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Collect every value of `key` in query order, comma-joined.
///
/// A key given more than once (`?i=go&i=rust`) yields `go,rust`. Returns
/// `None` when the key is absent.
///
/// # Examples
///
/// ```
/// use skills_api::redirect::joined_param;
///
/// let params = vec![
///     ("i".to_string(), "go".to_string()),
///     ("perline".to_string(), "3".to_string()),
///     ("i".to_string(), "rust".to_string()),
/// ];
/// assert_eq!(joined_param(&params, "i").as_deref(), Some("go,rust"));
/// assert_eq!(joined_param(&params, "theme"), None);
/// ```
pub fn joined_param(params: &[(String, String)], key: &str) -> Option<String> {
    let values: Vec<&str> = params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect();
    (!values.is_empty()).then(|| values.join(","))
}

/// Handler for the legacy icon-list routes.
pub async fn legacy_redirect(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let perline = joined_param(&params, PERLINE_PARAM);
    let icons = joined_param(&params, ICONS_PARAM);
    let target = legacy_target(perline.as_deref(), icons.as_deref(), state.redirect_policy);
    tracing::debug!(target = %target, "Redirecting legacy icon request");
    found(&target)
}
