//! Coordinate - A point on the Earth's surface

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting values outside the valid ranges
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(DomainError::Validation(format!(
                "Coordinate out of range: ({}, {})",
                latitude, longitude
            )))
        }
    }

    /// Returns true if both components are within range (NaN is never valid)
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_bounds() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(37.7749, -122.4194).is_ok());
        let err = Coordinate::try_new(123.0, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_display_is_provider_location_format() {
        let coord = Coordinate::new(37.7749, -122.4194);
        assert_eq!(coord.to_string(), "37.7749,-122.4194");
    }
}
