//! Geocoding error types.

use crate::domain::EmptyPostcode;
use crate::http::RequestError;

/// Errors that can occur when resolving a postcode to a location.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// Input was blank once whitespace was removed
    #[error("Unable to get location. Error: {0}")]
    EmptyPostcode(#[from] EmptyPostcode),

    /// Request failed in transport or with an unexpected status
    #[error("Unable to get location. Error: {0}")]
    Request(#[from] RequestError),

    /// postcodes.io answered 404
    #[error("Unable to get location. Error: {message} ({postcode})")]
    UnknownPostcode { postcode: String, message: String },

    /// Body is not valid JSON
    #[error("Unable to get location. Error: response is not valid JSON: {message}")]
    Parse { message: String },

    /// Body is JSON but a field has the wrong type
    #[error("Unable to get location. Error: unexpected response shape: {message}")]
    Malformed { message: String },

    /// Body is JSON but a required field is absent or null
    #[error("Unable to get location. Error: response has no {field}")]
    MissingField { field: &'static str },
}
