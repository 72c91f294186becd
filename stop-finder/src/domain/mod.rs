//! Core domain types.
//!
//! These are the values that flow between pipeline stages. They are
//! independent of the wire formats of either upstream API.

mod location;
mod postcode;
mod stop_point;

pub use location::Location;
pub use postcode::{EmptyPostcode, Postcode};
pub use stop_point::StopPoint;
