//! Google Maps web service client
//!
//! Geocoding API for address lookup and Places Nearby Search for facilities.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use binfinder::{
    Coordinate, DomainError, GeocodeCandidate, GeocodingProvider, NearbyQuery, PlaceRecord,
    PlacesProvider, ProviderError, RankBy,
};

use crate::config::GoogleMapsConfig;
use crate::status::{check_api_status, map_http_error, request_failed};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const NEARBY_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";

/// Client for the Google Maps Geocoding and Places APIs
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: Client,
    config: GoogleMapsConfig,
}

impl GoogleMapsClient {
    /// Creates a client, failing early on a missing key.
    pub fn new(config: GoogleMapsConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String, ProviderError> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(request_failed)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response.text().await.map_err(request_failed)
    }
}

#[async_trait]
impl GeocodingProvider for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, ProviderError> {
        tracing::debug!("Geocoding '{}'", address);
        let body = self
            .get(GEOCODE_PATH, &[("address", address.to_string())])
            .await?;
        parse_geocode_response(&body)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceRecord>, ProviderError> {
        tracing::debug!(
            "Nearby search '{}' at {} (radius {}m, rank by {})",
            query.keyword,
            query.location,
            query.radius_meters,
            query.rank_by
        );
        let body = self.get(NEARBY_SEARCH_PATH, &nearby_params(query)).await?;
        parse_nearby_response(&body)
    }
}

// ============================================
// Request/Response Types
// ============================================

fn nearby_params(query: &NearbyQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("location", query.location.to_string()),
        ("keyword", query.keyword.clone()),
        ("rankby", query.rank_by.as_str().to_string()),
    ];
    // The API rejects radius together with rankby=distance
    if query.rank_by == RankBy::Prominence {
        params.push(("radius", query.radius_meters.to_string()));
    }
    params
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    fn to_coordinate(&self) -> Result<Coordinate, DomainError> {
        Coordinate::try_new(self.lat, self.lng)
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: Option<String>,
    geometry: GeocodeGeometry,
}

#[derive(Deserialize)]
struct GeocodeGeometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct NearbyResponse {
    status: String,
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Deserialize)]
struct PlaceResult {
    name: Option<String>,
    vicinity: Option<String>,
    rating: Option<f64>,
    geometry: Option<PlaceGeometry>,
}

#[derive(Deserialize)]
struct PlaceGeometry {
    location: Option<LatLng>,
}

fn parse_geocode_response(body: &str) -> Result<Vec<GeocodeCandidate>, ProviderError> {
    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|err| ProviderError::ParseError(err.to_string()))?;
    check_api_status(&response.status, response.error_message)?;

    response
        .results
        .into_iter()
        .map(|result| {
            let location = result
                .geometry
                .location
                .to_coordinate()
                .map_err(|err| ProviderError::ParseError(err.to_string()))?;
            Ok(GeocodeCandidate {
                location,
                formatted_address: result.formatted_address,
            })
        })
        .collect()
}

fn parse_nearby_response(body: &str) -> Result<Vec<PlaceRecord>, ProviderError> {
    let response: NearbyResponse =
        serde_json::from_str(body).map_err(|err| ProviderError::ParseError(err.to_string()))?;
    check_api_status(&response.status, response.error_message)?;

    Ok(response
        .results
        .into_iter()
        .map(|place| {
            // An out-of-range location is treated as missing: distance unknown
            let location = place
                .geometry
                .and_then(|g| g.location)
                .and_then(|l| match l.to_coordinate() {
                    Ok(coordinate) => Some(coordinate),
                    Err(err) => {
                        tracing::debug!("Dropping location of {:?}: {}", place.name, err);
                        None
                    }
                });
            PlaceRecord {
                name: place.name,
                vicinity: place.vicinity,
                rating: place.rating,
                location,
            }
        })
        .collect())
}
