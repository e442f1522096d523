//! WasteCategory - Sorting decision for a piece of waste

use serde::{Deserialize, Serialize};

/// Where an item belongs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WasteCategory {
    Compost,
    Recycle,
    Trash,
}

impl WasteCategory {
    /// Label of the facility search category that handles this waste.
    pub fn facility_category(&self) -> &'static str {
        match self {
            WasteCategory::Compost => "Compost",
            WasteCategory::Recycle => "Recycle",
            WasteCategory::Trash => "Trash/Dump",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteCategory::Compost => write!(f, "COMPOST"),
            WasteCategory::Recycle => write!(f, "RECYCLE"),
            WasteCategory::Trash => write!(f, "TRASH"),
        }
    }
}

impl std::str::FromStr for WasteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compost" => Ok(WasteCategory::Compost),
            "recycle" | "recycling" => Ok(WasteCategory::Recycle),
            "trash" | "landfill" => Ok(WasteCategory::Trash),
            _ => Err(format!("Unknown waste category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("COMPOST".parse::<WasteCategory>(), Ok(WasteCategory::Compost));
        assert_eq!(" recycle ".parse::<WasteCategory>(), Ok(WasteCategory::Recycle));
        assert_eq!("Trash".parse::<WasteCategory>(), Ok(WasteCategory::Trash));
        assert!("glass".parse::<WasteCategory>().is_err());
    }

    #[test]
    fn test_maps_to_default_facility_category() {
        assert_eq!(WasteCategory::Trash.facility_category(), "Trash/Dump");
        assert_eq!(WasteCategory::Recycle.to_string(), "RECYCLE");
    }
}
