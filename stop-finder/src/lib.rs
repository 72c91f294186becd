//! Nearby public transport stop finder.
//!
//! Reads a UK postcode, geocodes it with postcodes.io, and lists the
//! nearest bus, coach and tram stops from the TfL Unified API.

pub mod config;
pub mod console;
pub mod domain;
pub mod http;
pub mod postcodes;
pub mod runner;
pub mod tfl;

#[cfg(test)]
mod testing;
