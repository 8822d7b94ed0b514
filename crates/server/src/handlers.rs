use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use catalog::{parse_movie_id_value, parse_rating_value, EntryRef, MovieId, RateError};
use pipeline::CatalogQuery;
use recommender::RecommendationRequest;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// Request types
//
// Query parameters stay raw text here; the core's parse functions decide
// what counts as absent.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviesParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationParams {
    pub based_on_id: Option<String>,
    pub genre: Option<String>,
    pub limit: Option<String>,
}

/// Rating submission; `id` and `rating` may be JSON numbers or numeric strings
#[derive(Debug, Default, Deserialize)]
pub struct RateRequest {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub rating: Value,
}

impl RateRequest {
    /// The targeted movie id, or `InvalidId` when there is no usable one
    pub fn movie_id(&self) -> Result<MovieId, RateError> {
        parse_movie_id_value(&self.id).ok_or_else(|| RateError::InvalidId(self.id.to_string()))
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List movies, optionally filtered by text, genre and minimum rating
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MoviesParams>,
) -> Json<Vec<EntryRef>> {
    let query = CatalogQuery::from_params(
        params.q.as_deref(),
        params.genre.as_deref(),
        params.min_rating.as_deref(),
    );
    Json(state.service.search(&query))
}

/// Get one movie by id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<EntryRef>> {
    raw_id
        .trim()
        .parse::<MovieId>()
        .ok()
        .and_then(|id| state.service.movie(id))
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Movie {} not found", raw_id)))
}

/// All distinct genre labels, sorted
pub async fn list_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.service.genres())
}

/// Ranked recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Json<Vec<EntryRef>> {
    let request = RecommendationRequest::from_params(
        params.based_on_id.as_deref(),
        params.genre.as_deref(),
        params.limit.as_deref(),
    );
    Json(state.service.recommend(&request))
}

/// Submit a rating. A missing or malformed body is a rejection like any
/// other invalid submission.
pub async fn rate(
    State(state): State<AppState>,
    payload: Option<Json<RateRequest>>,
) -> ApiResult<Json<EntryRef>> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let id = request.movie_id().inspect_err(|e| {
        tracing::warn!("Rejected rating: {}", e);
    })?;
    let submitted = parse_rating_value(&request.rating);

    let updated = state.service.rate(id, submitted)?;
    Ok(Json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Value) -> RateRequest {
        RateRequest {
            id,
            rating: json!(4),
        }
    }

    #[test]
    fn test_unusable_ids_are_tagged_as_ids() {
        for id in [json!("abc"), json!(0), json!(-2), Value::Null] {
            assert!(matches!(
                request(id).movie_id(),
                Err(RateError::InvalidId(_))
            ));
        }
        assert!(matches!(
            RateRequest::default().movie_id(),
            Err(RateError::InvalidId(_))
        ));
    }

    #[test]
    fn test_movie_id_accepts_integral_forms() {
        assert_eq!(request(json!(3)).movie_id(), Ok(3));
        assert_eq!(request(json!("3")).movie_id(), Ok(3));
        assert_eq!(request(json!(3.0)).movie_id(), Ok(3));
    }
}
