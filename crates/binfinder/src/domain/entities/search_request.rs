//! SearchRequest - A category label paired with a provider keyword

use serde::{Deserialize, Serialize};

/// Search radius used when the caller does not pick one
pub const DEFAULT_RADIUS_METERS: u32 = 5000;

/// One category to search for near the origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Caller-defined label, e.g. "Recycle"
    pub category: String,
    /// Query term sent to the places provider
    pub keyword: String,
}

impl SearchRequest {
    pub fn new(category: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
        }
    }

    /// Facility-type keywords that work well with the places provider.
    pub fn defaults() -> Vec<SearchRequest> {
        vec![
            SearchRequest::new("Recycle", "recycling center"),
            SearchRequest::new("Trash/Dump", "waste disposal service"),
            SearchRequest::new("Compost", "composting service"),
        ]
    }
}

impl std::str::FromStr for SearchRequest {
    type Err = String;

    /// Parses `CATEGORY=KEYWORD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, keyword) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected CATEGORY=KEYWORD, got '{}'", s))?;
        let (category, keyword) = (category.trim(), keyword.trim());
        if category.is_empty() || keyword.is_empty() {
            return Err(format!("Category and keyword must be non-empty: '{}'", s));
        }
        Ok(SearchRequest::new(category, keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_order() {
        let categories: Vec<_> = SearchRequest::defaults()
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["Recycle", "Trash/Dump", "Compost"]);
    }

    #[test]
    fn test_parse_category_keyword() {
        let req: SearchRequest = "E-Waste = electronics recycling".parse().unwrap();
        assert_eq!(req, SearchRequest::new("E-Waste", "electronics recycling"));

        // Only the first '=' separates
        let req: SearchRequest = "Odd=a=b".parse().unwrap();
        assert_eq!(req.keyword, "a=b");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("no separator".parse::<SearchRequest>().is_err());
        assert!("=keyword".parse::<SearchRequest>().is_err());
        assert!("Category= ".parse::<SearchRequest>().is_err());
    }
}
