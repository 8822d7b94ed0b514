//! The in-memory catalog store.
//!
//! `CatalogStore` owns the authoritative entries. Readers get snapshots of
//! `Arc<CatalogEntry>` handles; a rating update swaps in a fresh `Arc` at the
//! entry's index, so a snapshot taken before the update keeps the old value
//! and callers re-fetch to observe the new one.
//!
//! One `RwLock` guards the whole store, making every read and every write
//! atomic with respect to the others.

use crate::error::{RateError, RateResult, Result};
use crate::parser;
use crate::seed;
use crate::types::{is_valid_rating, round_rating, CatalogEntry, MovieId};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Shared, immutable handle to one catalog entry
pub type EntryRef = Arc<CatalogEntry>;

#[derive(Debug, Default)]
struct StoreInner {
    /// Entries in catalog order
    entries: Vec<EntryRef>,
    /// Position of each id in `entries`
    positions: HashMap<MovieId, usize>,
}

/// Main data structure holding the catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<StoreInner>,
}

impl CatalogStore {
    /// Build a store from entries, validating them first.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let entries = parser::validate_entries(entries)?;

        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.id, pos))
            .collect();
        let entries = entries.into_iter().map(Arc::new).collect();

        Ok(Self {
            inner: RwLock::new(StoreInner { entries, positions }),
        })
    }

    /// Store seeded with the built-in catalog
    pub fn seeded() -> Result<Self> {
        let store = Self::from_entries(seed::seed_entries())?;
        debug!("Seeded catalog with {} built-in entries", store.len());
        Ok(store)
    }

    /// Store seeded from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let entries = parser::parse_catalog_file(path)?;
        let store = Self::from_entries(entries)?;
        info!("Loaded {} catalog entries from {}", store.len(), path.display());
        Ok(store)
    }

    // Entries are only ever swapped whole, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Order-preserving snapshot of every entry
    pub fn get_all(&self) -> Vec<EntryRef> {
        self.read().entries.clone()
    }

    /// Look up one entry
    pub fn get_by_id(&self, id: MovieId) -> Option<EntryRef> {
        let inner = self.read();
        inner.positions.get(&id).map(|&pos| inner.entries[pos].clone())
    }

    /// Whether the store holds `id`
    pub fn contains(&self, id: MovieId) -> bool {
        self.read().positions.contains_key(&id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted, deduplicated genre labels across the catalog
    pub fn genres(&self) -> Vec<String> {
        let inner = self.read();
        let labels: BTreeSet<&str> = inner
            .entries
            .iter()
            .flat_map(|entry| entry.genre.iter().map(String::as_str))
            .collect();
        labels.into_iter().map(str::to_string).collect()
    }

    /// Replace the rating of one entry.
    ///
    /// The value is rounded to one decimal; values outside [0, 5] are
    /// rejected and leave the entry untouched.
    pub fn update_rating(&self, id: MovieId, new_rating: f64) -> RateResult<EntryRef> {
        self.modify_rating(id, |_| new_rating)
    }

    /// Read-modify-write of one entry's rating inside a single write lock.
    ///
    /// `f` receives the current rating and returns the one to store. The
    /// result is rounded to one decimal and must lie in [0, 5].
    pub fn modify_rating<F>(&self, id: MovieId, f: F) -> RateResult<EntryRef>
    where
        F: FnOnce(f64) -> f64,
    {
        let mut inner = self.write();
        let pos = *inner.positions.get(&id).ok_or(RateError::NotFound(id))?;

        let current = &inner.entries[pos];
        let new_rating = round_rating(f(current.rating));
        if !is_valid_rating(new_rating) {
            return Err(RateError::InvalidRating(format!(
                "{} is outside [0, 5]",
                new_rating
            )));
        }

        let updated = Arc::new(current.with_rating(new_rating));
        inner.entries[pos] = updated.clone();

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: MovieId, genres: &[&str], rating: f64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Movie {}", id),
            year: 2020,
            genre: genres.iter().map(|g| g.to_string()).collect(),
            rating,
            poster_url: String::new(),
            overview: String::new(),
            tags: vec![],
        }
    }

    fn create_test_store() -> CatalogStore {
        CatalogStore::from_entries(vec![
            make_entry(1, &["Sci-Fi", "Drama"], 4.7),
            make_entry(2, &["Thriller"], 4.3),
            make_entry(3, &["Sci-Fi"], 4.1),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_all_preserves_order() {
        let store = create_test_store();
        let ids: Vec<MovieId> = store.get_all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_get_by_id() {
        let store = create_test_store();
        assert_eq!(store.get_by_id(2).unwrap().rating, 4.3);
        assert!(store.get_by_id(99).is_none());
        assert!(store.contains(3));
        assert!(!store.contains(4));
    }

    #[test]
    fn test_update_rating_replaces_entry() {
        let store = create_test_store();
        let before = store.get_all();

        let updated = store.update_rating(1, 4.8).unwrap();
        assert_eq!(updated.rating, 4.8);
        assert_eq!(store.get_by_id(1).unwrap().rating, 4.8);

        // Snapshots taken earlier are not rewritten
        assert_eq!(before[0].rating, 4.7);
    }

    #[test]
    fn test_update_rating_unknown_id() {
        let store = create_test_store();
        assert_eq!(
            store.update_rating(42, 3.0).unwrap_err(),
            RateError::NotFound(42)
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_modify_rating_sees_current_value() {
        let store = create_test_store();
        store.modify_rating(2, |old| old - 1.0).unwrap();
        let updated = store.modify_rating(2, |old| old - 1.0).unwrap();
        assert!((updated.rating - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_update_rating_rounds_to_one_decimal() {
        let store = create_test_store();
        let updated = store.update_rating(2, 4.777).unwrap();
        assert_eq!(updated.rating, 4.8);
        assert_eq!(store.get_by_id(2).unwrap().rating, 4.8);
    }

    #[test]
    fn test_out_of_range_writes_rejected() {
        let store = create_test_store();

        assert!(matches!(
            store.update_rating(1, 7.0),
            Err(RateError::InvalidRating(_))
        ));
        assert!(matches!(
            store.modify_rating(3, |_| -2.0),
            Err(RateError::InvalidRating(_))
        ));
        assert!(matches!(
            store.update_rating(2, f64::NAN),
            Err(RateError::InvalidRating(_))
        ));

        assert_eq!(store.get_by_id(1).unwrap().rating, 4.7);
        assert_eq!(store.get_by_id(2).unwrap().rating, 4.3);
        assert_eq!(store.get_by_id(3).unwrap().rating, 4.1);
        assert!(store
            .get_all()
            .iter()
            .all(|e| is_valid_rating(e.rating)));
    }

    #[test]
    fn test_genres_sorted_and_deduplicated() {
        let store = CatalogStore::from_entries(vec![
            make_entry(1, &["Sci-Fi"], 4.0),
            make_entry(2, &["Drama"], 4.0),
            make_entry(3, &["Sci-Fi"], 4.0),
        ])
        .unwrap();
        assert_eq!(store.genres(), vec!["Drama", "Sci-Fi"]);
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let result = CatalogStore::from_entries(vec![
            make_entry(1, &["Drama"], 4.0),
            make_entry(1, &["Drama"], 3.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrent_modifications_are_not_lost() {
        let store = Arc::new(CatalogStore::from_entries(vec![make_entry(3, &["Sci-Fi"], 0.0)]).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..5 {
                        store.modify_rating(3, |old| old + 0.1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let rating = store.get_by_id(3).unwrap().rating;
        assert_eq!(rating, 4.0);
    }
}
