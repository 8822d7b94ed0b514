//! Free-text search over title, overview and tags.
//!
//! Matching is a plain case-insensitive substring test: both sides are
//! lower-cased, nothing is tokenized and there is no fuzzy matching.

use crate::traits::Filter;
use catalog::CatalogEntry;

/// Keeps entries whose title, overview or any tag contains the query.
pub struct TextQueryFilter {
    /// Query, already lower-cased
    term: String,
}

impl TextQueryFilter {
    /// Create a new TextQueryFilter.
    ///
    /// # Arguments
    /// * `query` - Text to look for; compared case-insensitively
    pub fn new(query: &str) -> Self {
        Self {
            term: query.to_lowercase(),
        }
    }

    fn contains_term(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.term)
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        self.contains_term(&entry.title)
            || self.contains_term(&entry.overview)
            || entry.tags.iter().any(|tag| self.contains_term(tag))
    }
}
