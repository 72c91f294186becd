//! Public transport stop points.

/// A bus, coach or tram boarding point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPoint {
    /// NaPTAN identifier, unique across the network.
    pub id: String,
    /// Human-readable stop name, e.g. "Victoria Station".
    pub common_name: String,
}

impl StopPoint {
    pub fn new(id: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            common_name: common_name.into(),
        }
    }
}
