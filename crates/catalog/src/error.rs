//! Error types for the catalog crate.
//!
//! Two families live here:
//! - `CatalogError` for building a store (seed validation, seed file loading)
//! - `RateError` for rejected rating submissions
//!
//! They are kept apart because a bad seed aborts startup while a bad rating
//! is an ordinary per-request outcome.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while seeding or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Seed file could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a seed file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Seed file is not a JSON array of catalog entries
    #[error("Malformed catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two entries share one id
    #[error("Duplicate movie id {id}")]
    DuplicateId { id: MovieId },

    /// A field of one entry had an invalid value
    #[error("Invalid value for {field} of movie {id}: {reason}")]
    InvalidValue {
        id: MovieId,
        field: String,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Why a rating submission was rejected.
///
/// The two cases stay distinct here; callers decide whether to merge them
/// into one outward rejection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// The submission targets an id the store does not hold
    #[error("Movie {0} not found")]
    NotFound(MovieId),

    /// The submission has no usable movie id
    #[error("Invalid movie id: {0}")]
    InvalidId(String),

    /// The submitted value is missing, non-numeric or outside [0, 5]
    #[error("Invalid rating: {0}")]
    InvalidRating(String),
}

/// Result of a rating write
pub type RateResult<T> = std::result::Result<T, RateError>;
