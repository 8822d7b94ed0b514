//! The Recommender chooses a source for each request and bounds the result.
//!
//! ## Algorithm
//! 1. Resolve the anchor against the full snapshot (not the genre pool)
//! 2. Restrict the pool to the requested genre, if any
//! 3. Rank with the Anchor source when an anchor resolved, else with the
//!    Rating source
//! 4. Keep the first `limit` candidates

use crate::anchor::AnchorSource;
use crate::popularity::RatingSource;
use crate::types::{Candidate, RecommendationRequest};
use catalog::EntryRef;
use pipeline::filters::GenreFilter;
use pipeline::Filter;
use tracing::{debug, instrument};

/// Produces ranked, size-bounded recommendations from a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    anchor: AnchorSource,
    rating: RatingSource,
}

impl Recommender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the anchor source (e.g. to change the genre weight)
    pub fn with_anchor_source(mut self, anchor: AnchorSource) -> Self {
        self.anchor = anchor;
        self
    }

    /// Ranked candidates with scores and explanations
    #[instrument(
        skip(self, entries, request),
        fields(anchor_id = ?request.anchor_id, genre = ?request.genre, limit = request.limit)
    )]
    pub fn recommend_scored(
        &self,
        entries: Vec<EntryRef>,
        request: &RecommendationRequest,
    ) -> Vec<Candidate> {
        let anchor = request
            .anchor_id
            .and_then(|id| entries.iter().find(|e| e.id == id).cloned());

        let pool = match &request.genre {
            Some(genre) => GenreFilter::new(genre.as_str()).apply(entries),
            None => entries,
        };

        let mut candidates = match &anchor {
            Some(anchor) => self.anchor.get_candidates(anchor, &pool),
            None => {
                if let Some(id) = request.anchor_id {
                    debug!("Anchor {} not in catalog, ranking by rating", id);
                }
                self.rating.get_candidates(&pool)
            }
        };

        candidates.truncate(request.effective_limit());
        debug!("Selected {} recommendations", candidates.len());
        candidates
    }

    /// Ranked entries, at most `limit` of them
    pub fn recommend(
        &self,
        entries: Vec<EntryRef>,
        request: &RecommendationRequest,
    ) -> Vec<EntryRef> {
        self.recommend_scored(entries, request)
            .into_iter()
            .map(|candidate| candidate.entry)
            .collect()
    }
}
