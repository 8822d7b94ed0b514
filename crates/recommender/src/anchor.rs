//! Anchor Source - content overlap with one movie
//!
//! Ranks the pool by how much each movie has in common with an anchor:
//!
//! ```text
//! score = shared_genre_count * 2 + rating
//! ```
//!
//! ## Algorithm
//! 1. Drop the anchor itself from the pool
//! 2. For each remaining movie, count the distinct genre labels it shares
//!    with the anchor
//! 3. Score it by the formula above
//! 4. Sort by score, highest first; equal scores keep pool order

use crate::types::{Candidate, CandidateSource};
use catalog::{CatalogEntry, EntryRef};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Weight of one shared genre, in rating points
pub const SHARED_GENRE_WEIGHT: f64 = 2.0;

/// Distinct labels of `entry` that the anchor also carries, in `entry` order
pub fn shared_genres(anchor: &CatalogEntry, entry: &CatalogEntry) -> Vec<String> {
    let anchor_genres: HashSet<&str> = anchor.genre.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    entry
        .genre
        .iter()
        .map(String::as_str)
        .filter(|g| anchor_genres.contains(g) && seen.insert(*g))
        .map(str::to_string)
        .collect()
}

/// Anchor source scores candidates by genre overlap with one movie
#[derive(Debug, Clone)]
pub struct AnchorSource {
    genre_weight: f64,
}

impl AnchorSource {
    /// Create a new Anchor source
    pub fn new() -> Self {
        Self {
            genre_weight: SHARED_GENRE_WEIGHT,
        }
    }

    /// Configure the weight of one shared genre (default: 2.0)
    pub fn with_genre_weight(mut self, weight: f64) -> Self {
        self.genre_weight = weight;
        self
    }

    /// Score one movie against the anchor
    pub fn score(&self, anchor: &CatalogEntry, entry: &EntryRef) -> Candidate {
        let shared = shared_genres(anchor, entry);
        let score = shared.len() as f64 * self.genre_weight + entry.rating;

        let explanation = match shared.len() {
            0 => format!(
                "No genres in common with {}; rated {}",
                anchor.title, entry.rating
            ),
            1 => format!(
                "Shares 1 genre with {} ({}); rated {}",
                anchor.title, shared[0], entry.rating
            ),
            n => format!(
                "Shares {} genres with {} ({}); rated {}",
                n,
                anchor.title,
                shared.join(", "),
                entry.rating
            ),
        };

        Candidate {
            entry: entry.clone(),
            source: CandidateSource::Anchor,
            score,
            shared_genres: shared,
            explanation,
        }
    }

    /// Rank the pool against the anchor, excluding the anchor itself
    #[instrument(skip(self, anchor, pool), fields(anchor_id = anchor.id, pool_size = pool.len()))]
    pub fn get_candidates(&self, anchor: &CatalogEntry, pool: &[EntryRef]) -> Vec<Candidate> {
        let others: Vec<&EntryRef> = pool.iter().filter(|e| e.id != anchor.id).collect();

        // Indexed parallel map, so the collected order is the pool order
        let mut candidates: Vec<Candidate> = others
            .par_iter()
            .map(|entry| self.score(anchor, entry))
            .collect();

        // Stable: equal scores keep pool order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!("Generated {} Anchor candidates", candidates.len());
        candidates
    }
}

impl Default for AnchorSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MovieId;
    use std::sync::Arc;

    fn make_entry(id: MovieId, title: &str, genres: &[&str], rating: f64) -> EntryRef {
        Arc::new(CatalogEntry {
            id,
            title: title.to_string(),
            year: 2020,
            genre: genres.iter().map(|g| g.to_string()).collect(),
            rating,
            poster_url: String::new(),
            overview: String::new(),
            tags: vec![],
        })
    }

    fn create_test_pool() -> Vec<EntryRef> {
        vec![
            make_entry(1, "Midnight Echoes", &["Sci-Fi", "Drama"], 4.7),
            make_entry(2, "Neon Alley", &["Thriller", "Crime"], 4.3),
            make_entry(3, "Quiet Orbit", &["Sci-Fi"], 4.1),
            make_entry(5, "Glass Horizon", &["Drama", "Romance"], 4.0),
            make_entry(6, "Afterimage", &["Mystery", "Drama"], 4.4),
        ]
    }

    #[test]
    fn test_shared_genres_counts_labels_once() {
        let anchor = make_entry(1, "Anchor", &["Sci-Fi", "Drama"], 4.0);
        let doubled = make_entry(2, "Doubled", &["Sci-Fi", "Sci-Fi", "Horror"], 4.0);
        assert_eq!(shared_genres(&anchor, &doubled), vec!["Sci-Fi"]);

        let unrelated = make_entry(3, "Unrelated", &["Comedy"], 4.0);
        assert!(shared_genres(&anchor, &unrelated).is_empty());
    }

    #[test]
    fn test_score_formula() {
        let pool = create_test_pool();
        let source = AnchorSource::new();

        let candidate = source.score(&pool[0], &pool[2]);
        assert_eq!(candidate.shared_genre_count(), 1);
        assert!((candidate.score - 6.1).abs() < 1e-9);
        assert_eq!(candidate.source, CandidateSource::Anchor);
        assert_eq!(
            candidate.explanation,
            "Shares 1 genre with Midnight Echoes (Sci-Fi); rated 4.1"
        );

        let unrelated = source.score(&pool[0], &pool[1]);
        assert!((unrelated.score - 4.3).abs() < 1e-9);
    }

    #[test]
    fn test_get_candidates_excludes_anchor_and_ranks() {
        let pool = create_test_pool();
        let candidates = AnchorSource::new().get_candidates(&pool[0], &pool);

        let ids: Vec<MovieId> = candidates.iter().map(|c| c.movie_id()).collect();
        // 6: 2 + 4.4, 3: 2 + 4.1, 5: 2 + 4.0, 2: 0 + 4.3
        assert_eq!(ids, vec![6, 3, 5, 2]);
        assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let pool = vec![
            make_entry(1, "Anchor", &["Drama"], 4.0),
            make_entry(2, "First", &["Drama"], 3.5),
            make_entry(3, "Second", &["Drama"], 3.5),
            make_entry(4, "Third", &["Drama"], 3.5),
        ];
        let candidates = AnchorSource::new().get_candidates(&pool[0], &pool);
        let ids: Vec<MovieId> = candidates.iter().map(|c| c.movie_id()).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_with_genre_weight() {
        let pool = create_test_pool();
        let source = AnchorSource::new().with_genre_weight(0.0);
        let candidate = source.score(&pool[0], &pool[2]);
        assert!((candidate.score - 4.1).abs() < 1e-9);
    }
}
