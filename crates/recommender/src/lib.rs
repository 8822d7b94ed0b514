//! # Recommender Crate
//!
//! Content-based recommendations over a catalog snapshot.
//!
//! ## Components
//!
//! ### Anchor Source
//! Ranks by overlap with one movie: `shared_genres * 2 + rating`.
//! The anchor itself is never recommended.
//!
//! ### Rating Source
//! Ranks by rating alone. Used when no anchor is given or the anchor id is
//! unknown.
//!
//! ### Recommender
//! Applies the optional genre restriction, picks the source and truncates to
//! the limit (default 6). Both sources sort stably, so equal scores keep
//! catalog order.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//! use recommender::{RecommendationRequest, Recommender};
//!
//! let store = CatalogStore::seeded()?;
//! let request = RecommendationRequest::new().with_anchor(1).with_limit(3);
//! for candidate in Recommender::new().recommend_scored(store.get_all(), &request) {
//!     println!("{} ({:.1}): {}", candidate.entry.title, candidate.score, candidate.explanation);
//! }
//! ```

// Public modules
pub mod anchor;
pub mod engine;
pub mod popularity;
pub mod types;

// Re-export commonly used types
pub use anchor::{shared_genres, AnchorSource, SHARED_GENRE_WEIGHT};
pub use engine::Recommender;
pub use popularity::RatingSource;
pub use types::{
    parse_anchor_param, parse_limit_param, Candidate, CandidateSource, RecommendationRequest,
    DEFAULT_LIMIT,
};
