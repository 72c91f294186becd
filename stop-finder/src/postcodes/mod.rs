//! postcodes.io geocoding client.
//!
//! Turns a UK postcode into latitude/longitude using the public
//! `GET /postcodes/{postcode}` endpoint. No API key is required.

mod client;
mod error;
mod types;

pub use client::{PostcodeClient, PostcodeClientConfig, parse_location};
pub use error::LocationError;
pub use types::{ErrorResponse, PostcodeResponse, PostcodeResult};
