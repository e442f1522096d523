//! Rating - Provider star rating of a place

use serde::{Serialize, Serializer};

/// Star rating as reported by the places provider.
///
/// Places without a rating are `NotAvailable`, rendered as `N/A`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Rating {
    Stars(f64),
    #[default]
    NotAvailable,
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Rating::NotAvailable, Rating::Stars)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Provider ratings carry one decimal
            Rating::Stars(v) => write!(f, "{:.1}", v),
            Rating::NotAvailable => write!(f, "N/A"),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Stars(v) => serializer.serialize_f64(*v),
            Rating::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rating_is_not_available() {
        assert_eq!(Rating::from(None), Rating::NotAvailable);
        assert_eq!(Rating::from(Some(4.5)), Rating::Stars(4.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rating::Stars(4.5).to_string(), "4.5");
        assert_eq!(Rating::Stars(4.0).to_string(), "4.0");
        assert_eq!(Rating::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_serializes_as_number_or_na() {
        assert_eq!(
            serde_json::to_value(Rating::Stars(3.9)).unwrap(),
            serde_json::json!(3.9)
        );
        assert_eq!(
            serde_json::to_value(Rating::NotAvailable).unwrap(),
            serde_json::json!("N/A")
        );
    }
}
