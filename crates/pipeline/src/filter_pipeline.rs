//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use catalog::EntryRef;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter::new("neon"))
///     .add_filter(GenreFilter::new("Thriller"))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let matches = pipeline.apply(store.get_all());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// Each filter sees the output of the previous one, so the result is the
    /// AND of every filter with the input order kept.
    pub fn apply(&self, entries: Vec<EntryRef>) -> Vec<EntryRef> {
        let mut current = entries;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{ids, make_entry};
    use crate::filters::{GenreFilter, MinimumRatingFilter};

    fn create_test_entries() -> Vec<EntryRef> {
        vec![
            make_entry(1, "Midnight Echoes", &["Sci-Fi", "Drama"], 4.7),
            make_entry(2, "Neon Alley", &["Thriller", "Crime"], 4.3),
            make_entry(3, "Quiet Orbit", &["Sci-Fi"], 4.1),
            make_entry(4, "Soft Reset", &["Sci-Fi", "Thriller"], 4.3),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(create_test_entries());
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(GenreFilter::new("Thriller"));
        let filtered = pipeline.apply(create_test_entries());
        assert_eq!(ids(&filtered), vec![2, 4]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new("Sci-Fi"))
            .add_filter(MinimumRatingFilter::new(4.2));

        assert_eq!(pipeline.filter_names(), vec!["GenreFilter", "MinimumRatingFilter"]);
        assert_eq!(ids(&pipeline.apply(create_test_entries())), vec![1, 4]);
    }
}
