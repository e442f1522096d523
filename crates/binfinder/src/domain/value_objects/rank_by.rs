//! RankBy - Ordering requested from the places provider

use serde::{Deserialize, Serialize};

/// How the places provider orders its results
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    /// Provider relevance / importance ordering
    #[default]
    Prominence,
    /// Provider-side distance ordering
    Distance,
}

impl RankBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankBy::Prominence => "prominence",
            RankBy::Distance => "distance",
        }
    }
}

impl std::fmt::Display for RankBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
