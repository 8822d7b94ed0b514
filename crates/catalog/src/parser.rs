//! Parsing and validation of catalog seed data.
//!
//! A seed file is a JSON array of entries in the same shape the API emits:
//!
//! ```json
//! [{"id": 1, "title": "Midnight Echoes", "year": 2023,
//!   "genre": ["Sci-Fi", "Drama"], "rating": 4.7,
//!   "posterUrl": "", "overview": "...", "tags": ["slow-burn"]}]
//! ```
//!
//! Every entry goes through `validate_entries` before it reaches a store,
//! whether it came from a file or from the built-in seed.

use crate::error::{CatalogError, Result};
use crate::types::{is_valid_rating, round_rating, CatalogEntry, MovieId};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON seed document into validated entries
pub fn parse_catalog_json(content: &str) -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(content)?;
    validate_entries(entries)
}

/// Read and parse a JSON seed file
pub fn parse_catalog_file(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    parse_catalog_json(&content)
}

/// Check the entry invariants and normalise ratings to one decimal.
///
/// Fails on the first offending entry, in catalog order.
pub fn validate_entries(entries: Vec<CatalogEntry>) -> Result<Vec<CatalogEntry>> {
    let mut seen: HashSet<MovieId> = HashSet::with_capacity(entries.len());

    entries
        .into_iter()
        .map(|mut entry| {
            validate_entry(&entry)?;
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
            entry.rating = round_rating(entry.rating);
            Ok(entry)
        })
        .collect()
}

fn validate_entry(entry: &CatalogEntry) -> Result<()> {
    let invalid = |field: &str, reason: &str| CatalogError::InvalidValue {
        id: entry.id,
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if entry.id == 0 {
        return Err(invalid("id", "must be a positive integer"));
    }
    if entry.title.trim().is_empty() {
        return Err(invalid("title", "must not be empty"));
    }
    if entry.genre.is_empty() {
        return Err(invalid("genre", "must contain at least one label"));
    }
    if entry.genre.iter().any(|g| g.is_empty()) {
        return Err(invalid("genre", "labels must not be empty"));
    }
    if !is_valid_rating(entry.rating) {
        return Err(invalid("rating", &format!("{} is outside [0, 5]", entry.rating)));
    }
    Ok(())
}
