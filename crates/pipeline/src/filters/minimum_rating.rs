//! Filter to ensure a minimum quality threshold.

use crate::traits::Filter;
use catalog::CatalogEntry;

/// Removes entries rated below the threshold.
///
/// An entry rated exactly at the threshold is kept.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest rating that still passes
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.rating >= self.min_rating
    }
}
