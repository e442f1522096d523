//! Places Service Port
//!
//! Abstract interface for keyword searches around a coordinate.

use async_trait::async_trait;

use crate::domain::entities::Coordinate;
use crate::domain::errors::ProviderError;
use crate::domain::value_objects::RankBy;

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub location: Coordinate,
    pub keyword: String,
    pub radius_meters: u32,
    pub rank_by: RankBy,
}

impl NearbyQuery {
    pub fn new(location: Coordinate, keyword: impl Into<String>, radius_meters: u32) -> Self {
        Self {
            location,
            keyword: keyword.into(),
            radius_meters,
            rank_by: RankBy::Prominence,
        }
    }
}

/// A place as returned by the provider. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceRecord {
    pub name: Option<String>,
    /// Approximate address
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub location: Option<Coordinate>,
}

/// Service interface for nearby place search
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Places matching the query, in the provider's ranking order
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceRecord>, ProviderError>;
}
