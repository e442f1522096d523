//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the provider ports.

mod geo_search;

pub use geo_search::GeoSearch;
