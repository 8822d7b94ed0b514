//! Filter implementations for the catalog pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod minimum_rating;
pub mod text_query;

// Re-export for convenience
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use text_query::TextQueryFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{CatalogEntry, EntryRef, MovieId};
    use std::sync::Arc;

    pub fn make_entry(id: MovieId, title: &str, genres: &[&str], rating: f64) -> EntryRef {
        Arc::new(CatalogEntry {
            id,
            title: title.to_string(),
            year: 2020,
            genre: genres.iter().map(|g| g.to_string()).collect(),
            rating,
            poster_url: String::new(),
            overview: String::new(),
            tags: vec![],
        })
    }

    pub fn ids(entries: &[EntryRef]) -> Vec<MovieId> {
        entries.iter().map(|e| e.id).collect()
    }
}
