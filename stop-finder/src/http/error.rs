//! HTTP request error types.

/// Errors from a single GET request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Transport failure (connection refused, timeout, bad TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// Base URL could not be parsed or cannot carry a path
    #[error("invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

impl RequestError {
    /// The HTTP status, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Http(e) => e.status().map(|s| s.as_u16()),
            RequestError::InvalidUrl { .. } => None,
        }
    }
}
