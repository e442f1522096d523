//! Geocoding Service Port
//!
//! Abstract interface for turning a free-text address into coordinates.

use async_trait::async_trait;

use crate::domain::entities::Coordinate;
use crate::domain::errors::ProviderError;

/// One candidate match for an address
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub location: Coordinate,
    pub formatted_address: Option<String>,
}

/// Service interface for geocoding
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Candidates for an address, best match first. Empty when nothing matched.
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, ProviderError>;
}
