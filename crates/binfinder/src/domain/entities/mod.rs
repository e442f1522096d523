//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Coordinate: A point on the Earth's surface
//! - SearchRequest: One category label and its provider keyword
//! - FacilityResult: A place annotated with its distance from the origin
//! - SearchResultSet: Capped facility lists keyed by category
//! - ImageInput / WasteClassification: Photo classification payloads

mod classification;
mod coordinate;
mod facility;
mod result_set;
mod search_request;

pub use classification::*;
pub use coordinate::*;
pub use facility::*;
pub use result_set::*;
pub use search_request::*;
