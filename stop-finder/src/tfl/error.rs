//! Stop point lookup error types.

use crate::http::RequestError;

/// Errors that can occur when looking up nearby stop points.
#[derive(Debug, thiserror::Error)]
pub enum StopLookupError {
    /// Request failed in transport or with an unexpected status
    #[error("Unable to get stop points. Error: {0}")]
    Request(#[from] RequestError),

    /// Body is not valid JSON
    #[error("Unable to get stop points. Error: response is not valid JSON: {message}")]
    Parse { message: String },

    /// Body is JSON but has no usable `stopPoints` array
    #[error("Unable to get stop points. Error: unexpected response shape: {message}")]
    Malformed { message: String },
}
