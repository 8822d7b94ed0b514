//! Filter to keep only movies carrying one genre label.

use crate::traits::Filter;
use catalog::CatalogEntry;

/// Keeps entries whose genre list contains the label.
///
/// Comparison is exact and case-sensitive, matching how labels are written
/// in the catalog ("Sci-Fi", not "sci-fi").
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.has_genre(&self.genre)
    }
}
