//! Binfinder Domain Library
//!
//! Core types and use cases for finding waste facilities near an address.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Coordinate, FacilityResult, SearchResultSet)
//!   - `value_objects/`: Immutable value types (Rating, RankBy, WasteCategory)
//!   - `services/`: Pure domain computations (great-circle distance)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Geocoding, places search and classification providers
//!
//! - **Application** (`application/`): Use cases orchestrating the ports
//!   - `GeoSearch`: geocode an address, search each category, rank results
//!
//! # Usage
//!
//! ```rust,ignore
//! use binfinder::{GeoSearch, SearchRequest, DEFAULT_RADIUS_METERS};
//!
//! let search = GeoSearch::new(geocoder, places);
//! let requests = SearchRequest::defaults();
//! let (origin, results) = search
//!     .find_nearest_facilities("San Francisco, CA", &requests, DEFAULT_RADIUS_METERS)
//!     .await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::GeoSearch;
pub use domain::{
    great_circle_distance, haversine_miles, CategoryResult, Coordinate, DomainError,
    FacilityResult, ImageInput, ProviderError, RankBy, Rating, SearchRequest, SearchResultSet,
    WasteCategory, WasteClassification, DEFAULT_RADIUS_METERS, EARTH_RADIUS_MILES,
    MAX_RESULTS_PER_CATEGORY, WASTE_SORTING_PROMPT,
};
pub use ports::{
    GeocodeCandidate, GeocodingProvider, NearbyQuery, PlaceRecord, PlacesProvider,
    WasteClassifier,
};
