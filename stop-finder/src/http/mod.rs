//! Minimal HTTP GET helper shared by both upstream API clients.
//!
//! Every call is a single attempt: no retries, no redirects beyond what
//! reqwest does by default, and only `200 OK` counts as success.

mod client;
mod error;

pub use client::{DEFAULT_TIMEOUT, HttpClient, QueryParam, build_url};
pub use error::RequestError;
