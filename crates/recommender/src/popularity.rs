//! Rating Source - quality prior
//!
//! Used when a request has no anchor, or names an id the catalog does not
//! hold. Candidates are ranked by rating alone, highest first, with equal
//! ratings in pool order.

use crate::types::{Candidate, CandidateSource};
use catalog::EntryRef;
use tracing::{debug, instrument};

/// Rating source ranks the pool by stored rating
#[derive(Debug, Clone, Default)]
pub struct RatingSource;

impl RatingSource {
    pub fn new() -> Self {
        Self
    }

    /// Rank the whole pool by rating
    #[instrument(skip(self, pool), fields(pool_size = pool.len()))]
    pub fn get_candidates(&self, pool: &[EntryRef]) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = pool
            .iter()
            .map(|entry| Candidate {
                entry: entry.clone(),
                source: CandidateSource::Rating,
                score: entry.rating,
                shared_genres: Vec::new(),
                explanation: format!("Top rated: {}", entry.rating),
            })
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!("Generated {} Rating candidates", candidates.len());
        candidates
    }
}
