//! Filtering of catalog entries.
//!
//! This crate provides:
//! - Filter trait and implementations for the three search criteria
//! - FilterPipeline for composing filters
//! - CatalogQuery for turning raw request parameters into a pipeline
//!
//! ## Semantics
//! Filters compose with logical AND and never reorder: the output is the
//! subsequence of the input that every filter accepts. An empty pipeline
//! returns its input unchanged.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::CatalogQuery;
//!
//! let query = CatalogQuery::from_params(Some("neon"), None, Some("4.2"));
//! let matches = query.apply(store.get_all());
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{parse_min_rating_param, parse_text_param, CatalogQuery};
