//! GeoSearch Application Service (Use Case)
//!
//! Geocodes an address, runs one nearby search per category and annotates
//! the results with their distance from the address.
//!
//! Each category keeps the provider's relevance order and is capped before
//! distances are computed. Results are never re-sorted by distance.

use std::sync::Arc;

use crate::domain::{
    CategoryResult, Coordinate, DomainError, FacilityResult, Rating, SearchRequest,
    SearchResultSet, MAX_RESULTS_PER_CATEGORY,
};
use crate::ports::{GeocodingProvider, NearbyQuery, PlaceRecord, PlacesProvider};

/// Application service for nearest-facility searches
pub struct GeoSearch<G: GeocodingProvider, P: PlacesProvider> {
    geocoder: Arc<G>,
    places: Arc<P>,
}

impl<G: GeocodingProvider, P: PlacesProvider> Clone for GeoSearch<G, P> {
    fn clone(&self) -> Self {
        Self {
            geocoder: Arc::clone(&self.geocoder),
            places: Arc::clone(&self.places),
        }
    }
}

impl<G: GeocodingProvider, P: PlacesProvider> GeoSearch<G, P> {
    pub fn new(geocoder: Arc<G>, places: Arc<P>) -> Self {
        Self { geocoder, places }
    }

    /// Resolve an address to the coordinate of its first geocoding candidate.
    ///
    /// Provider failures are returned as-is; there is no retry.
    pub async fn resolve_address(&self, address: &str) -> Result<Coordinate, DomainError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(DomainError::Validation(
                "Address cannot be empty".to_string(),
            ));
        }

        let candidates = self.geocoder.geocode(address).await?;

        match candidates.into_iter().next() {
            Some(candidate) => {
                tracing::info!(
                    "Resolved '{}' to {} ({})",
                    address,
                    candidate.location,
                    candidate.formatted_address.as_deref().unwrap_or("-")
                );
                Ok(candidate.location)
            }
            None => {
                tracing::warn!("Could not find coordinates for address: {}", address);
                Err(DomainError::not_found(address))
            }
        }
    }

    /// Search every category around `origin`.
    ///
    /// A failing category yields an empty list with its error recorded; the
    /// remaining categories still run. Duplicate categories keep the first
    /// occurrence.
    pub async fn search_nearby(
        &self,
        origin: Coordinate,
        requests: &[SearchRequest],
        radius_meters: u32,
    ) -> SearchResultSet {
        let mut results = SearchResultSet::new();

        for request in requests {
            if results.contains(&request.category) {
                tracing::warn!(
                    "Skipping duplicate category '{}' ({})",
                    request.category,
                    request.keyword
                );
                continue;
            }

            tracing::info!("Searching for {} ({})...", request.category, request.keyword);

            let query = NearbyQuery::new(origin, request.keyword.as_str(), radius_meters);
            let entry = match self.places.nearby_search(&query).await {
                Ok(places) => {
                    let facilities = places
                        .into_iter()
                        .take(MAX_RESULTS_PER_CATEGORY)
                        .map(|place| to_facility(&origin, place))
                        .collect();
                    CategoryResult::found(&request.category, &request.keyword, facilities)
                }
                Err(e) => {
                    tracing::warn!("Error searching for {}: {}", request.keyword, e);
                    CategoryResult::failed(&request.category, &request.keyword, e)
                }
            };

            results.push(entry);
        }

        results
    }

    /// Resolve `address`, then search every category around it.
    ///
    /// Returns the origin alongside the results. Geocoding failures abort the
    /// whole operation before any places query is issued.
    pub async fn find_nearest_facilities(
        &self,
        address: &str,
        requests: &[SearchRequest],
        radius_meters: u32,
    ) -> Result<(Coordinate, SearchResultSet), DomainError> {
        if radius_meters == 0 {
            return Err(DomainError::Validation(
                "Search radius must be greater than zero".to_string(),
            ));
        }

        let origin = self.resolve_address(address).await?;
        let results = self.search_nearby(origin, requests, radius_meters).await;

        tracing::info!(
            "Found {} facilities in {} categories ({} failed)",
            results.total_facilities(),
            results.len(),
            results.failures().count()
        );

        Ok((origin, results))
    }
}

fn to_facility(origin: &Coordinate, place: PlaceRecord) -> FacilityResult {
    FacilityResult::new(
        origin,
        place.name.unwrap_or_default(),
        place.vicinity,
        Rating::from(place.rating),
        place.location,
    )
}
