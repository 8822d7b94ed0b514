//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to catalog snapshots.

use catalog::{CatalogEntry, EntryRef};

/// Core trait for filtering catalog entries.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request handlers
/// - Filters only decide membership; `apply` keeps the input order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `entry` passes this filter
    fn matches(&self, entry: &CatalogEntry) -> bool;

    /// Keep the entries that pass, in their original order.
    fn apply(&self, entries: Vec<EntryRef>) -> Vec<EntryRef> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
