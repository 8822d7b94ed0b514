//! # Catalog Crate
//!
//! Owns the movie catalog and every write to it.
//!
//! ## Main Components
//!
//! - **types**: `CatalogEntry` and rating helpers
//! - **seed**: the built-in catalog the store starts from
//! - **parser**: JSON seed files and entry validation
//! - **store**: `CatalogStore`, the lock-guarded in-memory store
//! - **feedback**: `RatingUpdater`, the only component that changes ratings
//! - **error**: error types for loading and for rating submissions
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogStore, RatingUpdater};
//!
//! let store = CatalogStore::seeded()?;
//! let movie = store.get_by_id(1).unwrap();
//! println!("{} is rated {}", movie.title, movie.rating);
//!
//! let updated = RatingUpdater::new().rate(&store, 1, 5.0)?;
//! assert_eq!(updated.rating, 4.8);
//! ```

pub mod error;
pub mod feedback;
pub mod parser;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, RateError, RateResult, Result};
pub use feedback::{
    parse_movie_id_text, parse_movie_id_value, parse_rating_text, parse_rating_value,
    RatingUpdater, SUBMISSION_WEIGHT,
};
pub use store::{CatalogStore, EntryRef};
pub use types::{is_valid_rating, round_rating, CatalogEntry, MovieId, MAX_RATING, MIN_RATING};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = CatalogStore::seeded().unwrap();
        assert_eq!(store.len(), 15);

        let first = store.get_by_id(1).unwrap();
        assert_eq!(first.title, "Midnight Echoes");
        assert_eq!(first.genre, vec!["Sci-Fi", "Drama"]);
        assert_eq!(first.rating, 4.7);

        let last = store.get_by_id(15).unwrap();
        assert_eq!(last.title, "Skyline Loop");
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<MovieId> = seed::seed_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_genres() {
        let store = CatalogStore::seeded().unwrap();
        assert_eq!(
            store.genres(),
            vec![
                "Action", "Comedy", "Crime", "Drama", "Horror", "Mystery", "Romance", "Sci-Fi",
                "Thriller"
            ]
        );
    }

    #[test]
    fn test_seeded_entries_are_valid() {
        for entry in seed::seed_entries() {
            assert!(!entry.genre.is_empty(), "movie {} has no genre", entry.id);
            assert!(is_valid_rating(entry.rating));
            assert!(!entry.title.is_empty());
        }
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::from_entries(vec![]).unwrap();
        assert!(store.is_empty());
        assert!(store.genres().is_empty());
        assert!(store.get_by_id(1).is_none());
    }
}
