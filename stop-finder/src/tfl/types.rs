//! TfL `StopPoint` response DTOs.

use serde::Deserialize;

/// Body of `GET /StopPoint?lat=..&lon=..`.
///
/// TfL returns the stops sorted by distance from the query point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsResponse {
    pub stop_points: Vec<StopPointDto>,
}

/// Minimal DTO for a stop point - we only need the NaPTAN id and name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub naptan_id: String,
    pub common_name: String,
}
