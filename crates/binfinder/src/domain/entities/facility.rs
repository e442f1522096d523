//! FacilityResult - A nearby place annotated with its distance

use serde::Serialize;

use crate::domain::entities::Coordinate;
use crate::domain::services::great_circle_distance;
use crate::domain::value_objects::Rating;

/// A facility returned for one search category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityResult {
    pub name: String,
    /// Approximate address (provider "vicinity")
    pub address: Option<String>,
    pub rating: Rating,
    pub location: Option<Coordinate>,
    /// Distance from the search origin in miles.
    ///
    /// `0.0` when `location` is `None`; that means unknown, not co-located.
    pub distance_miles: f64,
}

impl FacilityResult {
    /// Build a result, computing its distance from `origin`
    pub fn new(
        origin: &Coordinate,
        name: impl Into<String>,
        address: Option<String>,
        rating: Rating,
        location: Option<Coordinate>,
    ) -> Self {
        let distance_miles = great_circle_distance(Some(origin), location.as_ref());
        Self {
            name: name.into(),
            address,
            rating,
            location,
            distance_miles,
        }
    }

    /// False when the provider gave no location and the distance is a placeholder
    pub fn has_known_distance(&self) -> bool {
        self.location.is_some()
    }

    /// Distance rounded to two decimals, for display
    pub fn rounded_distance(&self) -> f64 {
        (self.distance_miles * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_computed_from_origin() {
        let origin = Coordinate::new(37.7749, -122.4194);
        let facility = FacilityResult::new(
            &origin,
            "Oakland Recycling",
            Some("Oakland".to_string()),
            Rating::Stars(4.2),
            Some(Coordinate::new(37.8044, -122.2712)),
        );
        assert!(facility.has_known_distance());
        assert!((facility.distance_miles - 8.4).abs() < 0.2);
        assert_eq!(
            facility.rounded_distance(),
            (facility.distance_miles * 100.0).round() / 100.0
        );
    }

    #[test]
    fn test_missing_location_defaults_to_zero() {
        let origin = Coordinate::new(37.7749, -122.4194);
        let facility =
            FacilityResult::new(&origin, "Somewhere", None, Rating::NotAvailable, None);
        assert_eq!(facility.distance_miles, 0.0);
        assert!(!facility.has_known_distance());
    }

    #[test]
    fn test_serialized_shape() {
        let origin = Coordinate::new(0.0, 0.0);
        let facility = FacilityResult::new(&origin, "Depot", None, Rating::NotAvailable, None);
        let json = serde_json::to_value(&facility).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Depot",
                "address": null,
                "rating": "N/A",
                "location": null,
                "distance_miles": 0.0
            })
        );
    }
}
