use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use catalog::RateError;

/// Message for every rejected rating submission
pub const RATE_REJECTED_MESSAGE: &str = "Invalid movie id or rating";

/// API-level errors
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rating submission rejected. Unknown ids and bad values share one
    /// outward response; the tag is kept for logging.
    #[error("Rating rejected: {0}")]
    RateRejected(#[from] RateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::RateRejected(_) => {
                (StatusCode::BAD_REQUEST, RATE_REJECTED_MESSAGE.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
