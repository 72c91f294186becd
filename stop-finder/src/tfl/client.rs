//! TfL StopPoint HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Location, StopPoint};
use crate::http::{DEFAULT_TIMEOUT, HttpClient, QueryParam};

use super::error::StopLookupError;
use super::types::{StopPointDto, StopPointsResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Only surface-level public transport stops.
const STOP_TYPES: &str = "NaptanPublicBusCoachTram";

/// Default search radius in metres.
const DEFAULT_RADIUS_METRES: u32 = 1000;

/// Configuration for the stop point client.
#[derive(Debug, Clone)]
pub struct StopPointClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// TfL application id, sent as `app_id`
    pub app_id: Option<String>,
    /// TfL application key, sent as `app_key`
    pub app_key: Option<String>,
    /// Search radius around the query point
    pub radius_metres: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StopPointClientConfig {
    /// Create an anonymous config pointing at production TfL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: None,
            app_key: None,
            radius_metres: DEFAULT_RADIUS_METRES,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_credentials(mut self, app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self.app_key = Some(app_key.into());
        self
    }

    pub fn with_radius(mut self, metres: u32) -> Self {
        self.radius_metres = metres;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Whether both halves of the TfL credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.app_id.is_some() && self.app_key.is_some()
    }
}

impl Default for StopPointClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the TfL StopPoint endpoint.
#[derive(Debug, Clone)]
pub struct StopPointClient {
    http: HttpClient,
    app_id: Option<String>,
    app_key: Option<String>,
    radius_metres: u32,
}

impl StopPointClient {
    pub fn new(config: StopPointClientConfig) -> Result<Self, StopLookupError> {
        let http = HttpClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            http,
            app_id: config.app_id,
            app_key: config.app_key,
            radius_metres: config.radius_metres,
        })
    }

    /// Find up to `count` stop points near `location`, nearest first.
    pub async fn nearest(
        &self,
        location: Location,
        count: usize,
    ) -> Result<Vec<StopPoint>, StopLookupError> {
        let params = self.query_params(location);
        let body = self.http.get(&["StopPoint"], &params).await?;

        let stop_points = parse_stop_points(&body)?;
        let total = stop_points.len();
        let nearest = take_nearest(stop_points, count);

        debug!(
            %location,
            total,
            returned = nearest.len(),
            "fetched nearby stop points"
        );

        Ok(nearest)
    }

    /// Query pairs for a lookup around `location`, in request order.
    fn query_params(&self, location: Location) -> Vec<QueryParam<'static>> {
        let mut params = vec![
            ("stopTypes", STOP_TYPES.to_string()),
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("radius", self.radius_metres.to_string()),
        ];
        if let Some(app_id) = &self.app_id {
            params.push(("app_id", app_id.clone()));
        }
        if let Some(app_key) = &self.app_key {
            params.push(("app_key", app_key.clone()));
        }
        params
    }
}

/// Decode the `stopPoints` array from a StopPoint response body.
pub fn parse_stop_points(body: &str) -> Result<Vec<StopPointDto>, StopLookupError> {
    let response: StopPointsResponse = serde_json::from_str(body).map_err(|e| {
        if e.is_data() {
            StopLookupError::Malformed {
                message: e.to_string(),
            }
        } else {
            StopLookupError::Parse {
                message: e.to_string(),
            }
        }
    })?;

    Ok(response.stop_points)
}

/// Keep the first `count` stop points, preserving upstream order.
pub fn take_nearest(stop_points: Vec<StopPointDto>, count: usize) -> Vec<StopPoint> {
    stop_points
        .into_iter()
        .take(count)
        .map(|dto| StopPoint::new(dto.naptan_id, dto.common_name))
        .collect()
}
