//! # Catalog Service
//!
//! Coordinates the catalog components for one request:
//! - searches run the filter pipeline over a fresh snapshot
//! - recommendations run the recommender over a fresh snapshot
//! - rating submissions go through the rating updater, the only writer
//!
//! Every call re-reads the store, so results always reflect the latest
//! rating updates.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use catalog::{CatalogStore, EntryRef, MovieId, RateError, RatingUpdater};
use pipeline::CatalogQuery;
use recommender::{Candidate, RecommendationRequest, Recommender};

/// Seed a store from `path`, or from the built-in catalog when `None`
pub fn load_catalog(path: Option<&Path>) -> catalog::Result<CatalogStore> {
    match path {
        Some(path) => CatalogStore::load_from_file(path),
        None => CatalogStore::seeded(),
    }
}

/// Entry point shared by the HTTP layer and the CLI
#[derive(Debug)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
    recommender: Recommender,
    updater: RatingUpdater,
}

impl CatalogService {
    /// Create a service over `store` with default ranking and smoothing
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            recommender: Recommender::new(),
            updater: RatingUpdater::new(),
        }
    }

    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = recommender;
        self
    }

    pub fn with_rating_updater(mut self, updater: RatingUpdater) -> Self {
        self.updater = updater;
        self
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Entries matching every criterion of `query`, in catalog order
    #[instrument(skip(self))]
    pub fn search(&self, query: &CatalogQuery) -> Vec<EntryRef> {
        let start_time = Instant::now();
        let result = query.apply(self.store.get_all());
        info!(
            "Search matched {} of {} movies in {:.2?}",
            result.len(),
            self.store.len(),
            start_time.elapsed()
        );
        result
    }

    pub fn movie(&self, id: MovieId) -> Option<EntryRef> {
        self.store.get_by_id(id)
    }

    /// Sorted distinct genre labels
    pub fn genres(&self) -> Vec<String> {
        self.store.genres()
    }

    /// Ranked candidates with scores and explanations
    #[instrument(skip(self))]
    pub fn recommend_scored(&self, request: &RecommendationRequest) -> Vec<Candidate> {
        let start_time = Instant::now();
        let candidates = self
            .recommender
            .recommend_scored(self.store.get_all(), request);
        info!(
            "Selected {} recommendations in {:.2?}",
            candidates.len(),
            start_time.elapsed()
        );
        candidates
    }

    /// Ranked entries
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<EntryRef> {
        self.recommend_scored(request)
            .into_iter()
            .map(|candidate| candidate.entry)
            .collect()
    }

    /// Apply one rating submission.
    ///
    /// `submitted` is `None` when the raw input was not a number.
    #[instrument(skip(self))]
    pub fn rate(&self, id: MovieId, submitted: Option<f64>) -> Result<EntryRef, RateError> {
        let result = match submitted {
            Some(value) => self.updater.rate(&self.store, id, value),
            None if !self.store.contains(id) => Err(RateError::NotFound(id)),
            None => Err(RateError::InvalidRating("not a number".to_string())),
        };

        match &result {
            Ok(entry) => info!("Movie {} rating is now {}", id, entry.rating),
            Err(e) => warn!("Rejected rating for movie {}: {}", id, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> CatalogService {
        CatalogService::new(Arc::new(CatalogStore::seeded().unwrap()))
    }

    #[test]
    fn test_search_delegates_to_pipeline() {
        let service = create_test_service();
        let query = CatalogQuery::new().with_genre("Comedy");
        let ids: Vec<MovieId> = service.search(&query).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 9, 13]);
    }

    #[test]
    fn test_rate_then_read_back() {
        let service = create_test_service();
        let updated = service.rate(1, Some(5.0)).unwrap();
        assert_eq!(updated.rating, 4.8);
        assert_eq!(service.movie(1).unwrap().rating, 4.8);
    }

    #[test]
    fn test_rate_rejections_are_tagged() {
        let service = create_test_service();
        assert_eq!(service.rate(99, Some(3.0)).unwrap_err(), RateError::NotFound(99));
        assert_eq!(service.rate(99, None).unwrap_err(), RateError::NotFound(99));
        assert!(matches!(
            service.rate(1, None),
            Err(RateError::InvalidRating(_))
        ));
        assert!(matches!(
            service.rate(1, Some(7.0)),
            Err(RateError::InvalidRating(_))
        ));
        assert_eq!(service.movie(1).unwrap().rating, 4.7);
    }

    #[test]
    fn test_recommend_uses_latest_ratings() {
        let service = create_test_service();
        let request = RecommendationRequest::new().with_limit(1);
        assert_eq!(service.recommend(&request)[0].id, 1);

        for _ in 0..3 {
            service.rate(1, Some(0.0)).unwrap();
        }
        assert_eq!(service.recommend(&request)[0].id, 6);
    }

    #[test]
    fn test_load_catalog_defaults_to_seed() {
        let store = load_catalog(None).unwrap();
        assert_eq!(store.len(), 15);
        assert!(load_catalog(Some(Path::new("/no/such/catalog.json"))).is_err());
    }
}
