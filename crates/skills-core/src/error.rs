//! Error types for the icon catalog.

/// Errors that can occur while acquiring or serving the icon catalog.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An outbound request failed at the transport level or returned a
    /// non-success status.
    #[error("Upstream unavailable: {url}{}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    UpstreamUnavailable {
        /// The URL that was requested
        url: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Transport error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The upstream answered, but the payload did not have the expected shape.
    #[error("Malformed {what}: {message}")]
    MalformedPayload {
        /// Which payload was being decoded (e.g. "catalog", "svg")
        what: String,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config files, socket binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an upstream error for a response with a non-success status.
    pub fn upstream_status<S: Into<String>>(url: S, status: u16) -> Self {
        Error::UpstreamUnavailable {
            url: url.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Creates an upstream error from a transport failure.
    pub fn upstream_with_source<S, E>(url: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::UpstreamUnavailable {
            url: url.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Creates a malformed payload error.
    pub fn malformed<W, M>(what: W, message: M) -> Self
    where
        W: Into<String>,
        M: Into<String>,
    {
        Error::MalformedPayload {
            what: what.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if the failure originated from an upstream service,
    /// either unreachable or returning something unusable.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::UpstreamUnavailable { .. } | Error::MalformedPayload { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::malformed("json", err.to_string())
    }
}
