//! postcodes.io HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Location, Postcode};
use crate::http::{DEFAULT_TIMEOUT, HttpClient, RequestError};

use super::error::LocationError;
use super::types::{ErrorResponse, PostcodeResponse};

/// Default base URL for postcodes.io.
const DEFAULT_BASE_URL: &str = "https://api.postcodes.io";

/// Message used when a 404 body carries no `error` field.
const NOT_FOUND_MESSAGE: &str = "Postcode not found";

/// Configuration for the postcode client.
#[derive(Debug, Clone)]
pub struct PostcodeClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PostcodeClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PostcodeClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for postcode geocoding.
#[derive(Debug, Clone)]
pub struct PostcodeClient {
    http: HttpClient,
}

impl PostcodeClient {
    pub fn new(config: PostcodeClientConfig) -> Result<Self, LocationError> {
        let http = HttpClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        Ok(Self { http })
    }

    /// Resolve a postcode to its centroid.
    pub async fn location_for(&self, postcode: &Postcode) -> Result<Location, LocationError> {
        let body = match self.http.get(&["postcodes", postcode.as_str()], &[]).await {
            Ok(body) => body,
            Err(RequestError::Status { status: 404, body }) => {
                return Err(unknown_postcode(postcode, &body));
            }
            Err(e) => return Err(e.into()),
        };

        let location = parse_location(&body)?;
        debug!(%postcode, %location, "geocoded postcode");
        Ok(location)
    }
}

/// Extract coordinates from a postcode lookup body.
///
/// Invalid JSON, a wrongly typed field and an absent field are reported as
/// three distinct errors.
pub fn parse_location(body: &str) -> Result<Location, LocationError> {
    let response: PostcodeResponse = serde_json::from_str(body).map_err(|e| {
        if e.is_data() {
            LocationError::Malformed {
                message: e.to_string(),
            }
        } else {
            LocationError::Parse {
                message: e.to_string(),
            }
        }
    })?;

    let result = response
        .result
        .ok_or(LocationError::MissingField { field: "result" })?;
    let latitude = result.latitude.ok_or(LocationError::MissingField {
        field: "result.latitude",
    })?;
    let longitude = result.longitude.ok_or(LocationError::MissingField {
        field: "result.longitude",
    })?;

    Ok(Location::new(latitude, longitude))
}

fn unknown_postcode(postcode: &Postcode, body: &str) -> LocationError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string());

    LocationError::UnknownPostcode {
        postcode: postcode.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RequestLog, TestServer, recorded_route, text_route};
    use axum::http::StatusCode;
    use proptest::prelude::*;

    const BUCKINGHAM_PALACE: &str = r#"{
        "status": 200,
        "result": {
            "postcode": "SW1A 1AA",
            "quality": 1,
            "longitude": -0.141588,
            "latitude": 51.501009,
            "country": "England"
        }
    }"#;

    fn client_for(server: &TestServer) -> PostcodeClient {
        PostcodeClient::new(PostcodeClientConfig::new().with_base_url(server.base_url())).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = PostcodeClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = PostcodeClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn parse_location_copies_coordinates_exactly() {
        let location = parse_location(BUCKINGHAM_PALACE).unwrap();
        assert_eq!(location.latitude, 51.501009);
        assert_eq!(location.longitude, -0.141588);
    }

    #[test]
    fn parse_location_keeps_last_digit_of_precision() {
        let body = r#"{"result": {"latitude": 51.5, "longitude": -119.80463451369165}}"#;
        let location = parse_location(body).unwrap();
        assert_eq!(
            location.longitude.to_bits(),
            (-119.80463451369165f64).to_bits()
        );
    }

    proptest! {
        #[test]
        fn parse_location_round_trips_coordinate_bits(
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let body = format!(r#"{{"result":{{"latitude":{lat:?},"longitude":{lon:?}}}}}"#);
            let location = parse_location(&body).unwrap();

            prop_assert_eq!(location.latitude.to_bits(), lat.to_bits());
            prop_assert_eq!(location.longitude.to_bits(), lon.to_bits());
        }
    }

    #[test]
    fn parse_location_rejects_invalid_json() {
        let err = parse_location("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LocationError::Parse { .. }));

        let err = parse_location(r#"{"result": {"latitude": 51.5"#).unwrap_err();
        assert!(matches!(err, LocationError::Parse { .. }));
    }

    #[test]
    fn parse_location_reports_missing_result() {
        let err = parse_location(r#"{"status": 200}"#).unwrap_err();
        assert!(matches!(err, LocationError::MissingField { field: "result" }));

        let err = parse_location(r#"{"status": 200, "result": null}"#).unwrap_err();
        assert!(matches!(err, LocationError::MissingField { field: "result" }));
    }

    #[test]
    fn parse_location_reports_null_coordinates() {
        let body = r#"{"result": {"postcode": "JE2 3AB", "latitude": null, "longitude": null}}"#;
        let err = parse_location(body).unwrap_err();
        assert!(matches!(
            err,
            LocationError::MissingField {
                field: "result.latitude"
            }
        ));

        let body = r#"{"result": {"latitude": 49.2}}"#;
        let err = parse_location(body).unwrap_err();
        assert!(matches!(
            err,
            LocationError::MissingField {
                field: "result.longitude"
            }
        ));
    }

    #[test]
    fn parse_location_reports_wrong_types() {
        let body = r#"{"result": {"latitude": "51.5", "longitude": -0.1}}"#;
        let err = parse_location(body).unwrap_err();
        assert!(matches!(err, LocationError::Malformed { .. }));

        let err = parse_location("[]").unwrap_err();
        assert!(matches!(err, LocationError::Malformed { .. }));
    }

    #[tokio::test]
    async fn location_for_requests_postcode_path() {
        let log = RequestLog::default();
        let server = TestServer::spawn(recorded_route(
            "/postcodes/SW1A1AA",
            StatusCode::OK,
            BUCKINGHAM_PALACE,
            &log,
        ))
        .await;

        let postcode = Postcode::normalize("SW1A 1AA").unwrap();
        let location = client_for(&server).location_for(&postcode).await.unwrap();

        assert_eq!(location, Location::new(51.501009, -0.141588));
        assert_eq!(log.requests(), vec!["/postcodes/SW1A1AA".to_string()]);
    }

    #[tokio::test]
    async fn location_for_maps_404_to_unknown_postcode() {
        let server = TestServer::spawn(text_route(
            "/postcodes/ZZ99ZZ",
            StatusCode::NOT_FOUND,
            r#"{"status":404,"error":"Invalid postcode"}"#,
        ))
        .await;

        let postcode = Postcode::normalize("ZZ99ZZ").unwrap();
        let err = client_for(&server).location_for(&postcode).await.unwrap_err();

        match err {
            LocationError::UnknownPostcode { postcode, message } => {
                assert_eq!(postcode, "ZZ99ZZ");
                assert_eq!(message, "Invalid postcode");
            }
            other => panic!("expected unknown postcode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn location_for_falls_back_when_404_body_is_not_json() {
        // No route registered, so axum answers with an empty 404.
        let server = TestServer::spawn(axum::Router::new()).await;

        let postcode = Postcode::normalize("XX11XX").unwrap();
        let err = client_for(&server).location_for(&postcode).await.unwrap_err();

        match err {
            LocationError::UnknownPostcode { message, .. } => {
                assert_eq!(message, NOT_FOUND_MESSAGE);
            }
            other => panic!("expected unknown postcode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn location_for_wraps_server_errors() {
        let server = TestServer::spawn(text_route(
            "/postcodes/SW1A1AA",
            StatusCode::INTERNAL_SERVER_ERROR,
            "oops",
        ))
        .await;

        let postcode = Postcode::normalize("SW1A1AA").unwrap();
        let err = client_for(&server).location_for(&postcode).await.unwrap_err();

        assert!(matches!(
            err,
            LocationError::Request(RequestError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn location_for_reports_unparseable_body() {
        let server =
            TestServer::spawn(text_route("/postcodes/SW1A1AA", StatusCode::OK, "not json")).await;

        let postcode = Postcode::normalize("SW1A1AA").unwrap();
        let err = client_for(&server).location_for(&postcode).await.unwrap_err();

        assert!(matches!(err, LocationError::Parse { .. }));
    }
}
