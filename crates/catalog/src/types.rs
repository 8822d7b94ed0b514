//! Core domain types for the movie catalog.
//!
//! `CatalogEntry` is the only entity. Its JSON shape uses camelCase field
//! names (`posterUrl`) so the HTTP layer can serialize it directly.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog entry
pub type MovieId = u32;

/// Lowest rating an entry can hold
pub const MIN_RATING: f64 = 0.0;

/// Highest rating an entry can hold
pub const MAX_RATING: f64 = 5.0;

/// A movie in the catalog.
///
/// `rating` is kept rounded to one decimal place; the store is the only
/// place that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    /// Genre labels in insertion order (at least one)
    pub genre: Vec<String>,
    pub rating: f64,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Whether `label` is one of this entry's genres (exact, case-sensitive)
    pub fn has_genre(&self, label: &str) -> bool {
        self.genre.iter().any(|g| g == label)
    }

    /// Copy of this entry carrying a different rating
    pub fn with_rating(&self, rating: f64) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }
}

/// Round a rating to one decimal place, halves away from zero.
pub fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whether `value` is a usable rating: finite and within [0, 5]
pub fn is_valid_rating(value: f64) -> bool {
    value.is_finite() && (MIN_RATING..=MAX_RATING).contains(&value)
}
