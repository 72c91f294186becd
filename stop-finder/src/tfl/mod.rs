//! TfL Unified API stop point client.
//!
//! Finds bus, coach and tram stops within a radius of a point using
//! `GET /StopPoint`. TfL accepts anonymous requests at a low rate limit;
//! an app id and key raise it.

mod client;
mod error;
mod types;

pub use client::{StopPointClient, StopPointClientConfig, parse_stop_points, take_nearest};
pub use error::StopLookupError;
pub use types::{StopPointDto, StopPointsResponse};
