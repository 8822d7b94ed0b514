//! Candidate and request types shared by the recommendation sources.

use catalog::{parse_movie_id_text, EntryRef, MovieId};
use pipeline::parse_text_param;

/// Number of recommendations returned when no usable limit is given
pub const DEFAULT_LIMIT: usize = 6;

/// Which strategy scored a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Genre overlap with an anchor movie plus rating
    Anchor,
    /// Rating alone
    Rating,
}

/// A pool entry with the score it was ranked by.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: EntryRef,
    pub source: CandidateSource,
    pub score: f64,
    /// Labels shared with the anchor (empty for rating-ranked candidates)
    pub shared_genres: Vec<String>,
    /// Human-readable reason for the score
    pub explanation: String,
}

impl Candidate {
    pub fn movie_id(&self) -> MovieId {
        self.entry.id
    }

    pub fn shared_genre_count(&self) -> usize {
        self.shared_genres.len()
    }
}

/// Parameters of one recommendation call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// Movie to base recommendations on; unknown ids fall back to rating order
    pub anchor_id: Option<MovieId>,
    /// Restrict the pool to one exact genre label
    pub genre: Option<String>,
    /// Maximum number of results; 0 is read as `DEFAULT_LIMIT`
    pub limit: usize,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            anchor_id: None,
            genre: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from raw `basedOnId`, `genre` and `limit` parameters
    pub fn from_params(
        based_on: Option<&str>,
        genre: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        Self {
            anchor_id: parse_anchor_param(based_on),
            genre: parse_text_param(genre),
            limit: parse_limit_param(limit),
        }
    }

    pub fn with_anchor(mut self, anchor_id: MovieId) -> Self {
        self.anchor_id = Some(anchor_id);
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = parse_text_param(Some(genre));
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The limit actually applied
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

/// Anchor id: a positive integer, anything else means "no anchor".
pub fn parse_anchor_param(raw: Option<&str>) -> Option<MovieId> {
    raw.and_then(parse_movie_id_text)
}

/// Result limit: a positive integer, anything else means `DEFAULT_LIMIT`.
pub fn parse_limit_param(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&limit| limit > 0)
        .unwrap_or(DEFAULT_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_param() {
        assert_eq!(parse_limit_param(Some("3")), 3);
        assert_eq!(parse_limit_param(Some(" 10 ")), 10);
        assert_eq!(parse_limit_param(Some("0")), DEFAULT_LIMIT);
        assert_eq!(parse_limit_param(Some("-2")), DEFAULT_LIMIT);
        assert_eq!(parse_limit_param(Some("2.5")), DEFAULT_LIMIT);
        assert_eq!(parse_limit_param(Some("many")), DEFAULT_LIMIT);
        assert_eq!(parse_limit_param(None), DEFAULT_LIMIT);
    }

    #[test]
    fn test_parse_anchor_param() {
        assert_eq!(parse_anchor_param(Some("1")), Some(1));
        assert_eq!(parse_anchor_param(Some("1.0")), Some(1));
        assert_eq!(parse_anchor_param(Some("0")), None);
        assert_eq!(parse_anchor_param(Some("1.5")), None);
        assert_eq!(parse_anchor_param(Some("abc")), None);
        assert_eq!(parse_anchor_param(Some("")), None);
        assert_eq!(parse_anchor_param(None), None);
    }

    #[test]
    fn test_request_from_params() {
        let request = RecommendationRequest::from_params(Some("1"), Some(""), Some("x"));
        assert_eq!(request.anchor_id, Some(1));
        assert_eq!(request.genre, None);
        assert_eq!(request.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(RecommendationRequest::new().effective_limit(), 6);
        assert_eq!(RecommendationRequest::new().with_limit(0).effective_limit(), 6);
        assert_eq!(RecommendationRequest::new().with_limit(2).effective_limit(), 2);
    }
}
