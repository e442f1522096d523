//! SearchResultSet - Facility lists keyed by category
//!
//! Built fresh for every search. Categories keep the order in which they
//! were requested, and each list keeps the provider's relevance order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::entities::FacilityResult;
use crate::domain::errors::ProviderError;

/// Maximum facilities kept per category
pub const MAX_RESULTS_PER_CATEGORY: usize = 3;

/// Outcome of the search for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: String,
    pub keyword: String,
    pub facilities: Vec<FacilityResult>,
    /// Set when the provider call for this category failed; `facilities` is then empty
    pub error: Option<ProviderError>,
}

impl CategoryResult {
    /// Successful search; keeps at most `MAX_RESULTS_PER_CATEGORY` facilities in order
    pub fn found(
        category: impl Into<String>,
        keyword: impl Into<String>,
        mut facilities: Vec<FacilityResult>,
    ) -> Self {
        facilities.truncate(MAX_RESULTS_PER_CATEGORY);
        Self {
            category: category.into(),
            keyword: keyword.into(),
            facilities,
            error: None,
        }
    }

    pub fn failed(
        category: impl Into<String>,
        keyword: impl Into<String>,
        error: ProviderError,
    ) -> Self {
        Self {
            category: category.into(),
            keyword: keyword.into(),
            facilities: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered mapping from category to its capped facility list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultSet {
    entries: Vec<CategoryResult>,
}

impl SearchResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category. Returns false (and keeps the existing entry) if the
    /// category is already present.
    pub fn push(&mut self, entry: CategoryResult) -> bool {
        if self.contains(&entry.category) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.category == category)
    }

    /// Facilities for a category
    pub fn get(&self, category: &str) -> Option<&[FacilityResult]> {
        self.entry(category).map(|e| e.facilities.as_slice())
    }

    /// Full outcome for a category, including any provider error
    pub fn entry(&self, category: &str) -> Option<&CategoryResult> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryResult> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    /// Categories whose provider call failed
    pub fn failures(&self) -> impl Iterator<Item = &CategoryResult> {
        self.entries.iter().filter(|e| e.is_failed())
    }

    pub fn total_facilities(&self) -> usize {
        self.entries.iter().map(|e| e.facilities.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchResultSet {
    type Item = &'a CategoryResult;
    type IntoIter = std::slice::Iter<'a, CategoryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as `{ "<category>": [facility, ...], ... }` in request order.
impl Serialize for SearchResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.facilities)?;
        }
        map.end()
    }
}
