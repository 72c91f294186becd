//! postcodes.io response DTOs.
//!
//! Only the fields we read are modelled; serde ignores the rest. Fields
//! are optional because postcodes.io sends `null` coordinates for
//! non-geographic postcodes.

use serde::Deserialize;

/// Body of a successful `GET /postcodes/{postcode}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResponse {
    pub result: Option<PostcodeResult>,
}

/// The `result` object of a postcode lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeResult {
    /// Canonical formatting, e.g. "SW1A 1AA".
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Body sent alongside 4xx responses, e.g.
/// `{"status":404,"error":"Invalid postcode"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    pub error: Option<String>,
}
