//! Rating feedback: validating submissions and blending them into the store.
//!
//! The stored rating is an exponential moving average with no sample count:
//!
//! ```text
//! new = round1(old * (1 - w) + submitted * w),  w = 0.3 by default
//! ```
//!
//! Repeated submissions of the same value pull the stored rating toward it
//! geometrically, and the stored value always stays inside [0, 5].

use crate::error::RateError;
use crate::store::{CatalogStore, EntryRef};
use crate::types::{is_valid_rating, round_rating, MovieId};
use serde_json::Value;
use tracing::{debug, warn};

/// Weight given to a new submission when blending it into the stored rating
pub const SUBMISSION_WEIGHT: f64 = 0.3;

/// Validates rating submissions and applies the smoothing rule.
#[derive(Debug, Clone, Copy)]
pub struct RatingUpdater {
    submission_weight: f64,
}

impl RatingUpdater {
    /// Create an updater with the default 30% submission weight
    pub fn new() -> Self {
        Self {
            submission_weight: SUBMISSION_WEIGHT,
        }
    }

    /// Configure the weight of a new submission (default: 0.3).
    ///
    /// Values outside (0, 1] are ignored and the current weight is kept.
    pub fn with_submission_weight(mut self, weight: f64) -> Self {
        if weight > 0.0 && weight <= 1.0 {
            self.submission_weight = weight;
        } else {
            warn!("Ignoring submission weight {} outside (0, 1]", weight);
        }
        self
    }

    pub fn submission_weight(&self) -> f64 {
        self.submission_weight
    }

    /// Blend `submitted` into `current` and round to one decimal
    pub fn smooth(&self, current: f64, submitted: f64) -> f64 {
        round_rating(current * (1.0 - self.submission_weight) + submitted * self.submission_weight)
    }

    /// Validate a submission and apply it to the stored entry.
    ///
    /// An unknown id is reported before the rating value is looked at. On
    /// rejection the store is left untouched.
    pub fn rate(
        &self,
        store: &CatalogStore,
        id: MovieId,
        submitted: f64,
    ) -> Result<EntryRef, RateError> {
        if !store.contains(id) {
            return Err(RateError::NotFound(id));
        }
        if !is_valid_rating(submitted) {
            return Err(RateError::InvalidRating(format!(
                "{} is not a number in [0, 5]",
                submitted
            )));
        }

        let updated = store.modify_rating(id, |current| self.smooth(current, submitted))?;

        debug!(
            "Applied rating {} to movie {}, stored rating now {}",
            submitted, id, updated.rating
        );
        Ok(updated)
    }
}

impl Default for RatingUpdater {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret text as a rating: surrounding whitespace is ignored, and
/// anything that is not a finite number yields `None`.
pub fn parse_rating_text(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Interpret a JSON value as a rating.
///
/// Accepts JSON numbers and numeric strings. `null`, booleans, arrays and
/// objects are not numbers.
pub fn parse_rating_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_rating_text(s),
        _ => None,
    }
}

/// Interpret a JSON value as a movie id: a positive integral number or a
/// string accepted by `parse_movie_id_text`
pub fn parse_movie_id_value(value: &Value) -> Option<MovieId> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| MovieId::try_from(v).ok())
            .or_else(|| n.as_f64().and_then(movie_id_from_float))
            .filter(|&id| id > 0),
        Value::String(s) => parse_movie_id_text(s),
        _ => None,
    }
}

/// Interpret text as a movie id: a positive integer, optionally written
/// with a zero fraction (`"3"`, `" 3 "`, `"3.0"`).
pub fn parse_movie_id_text(text: &str) -> Option<MovieId> {
    let text = text.trim();
    text.parse::<MovieId>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(movie_id_from_float))
        .filter(|&id| id > 0)
}

fn movie_id_from_float(value: f64) -> Option<MovieId> {
    let integral = value.is_finite() && value.fract() == 0.0;
    (integral && value >= 0.0 && value <= MovieId::MAX as f64).then(|| value as MovieId)
}
