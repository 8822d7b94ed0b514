//! Search criteria and the parsing of raw request parameters.
//!
//! Request parameters arrive as optional text. Each one has an explicit
//! parse function with a fixed fallback: a parameter that is empty or does
//! not parse is treated as absent, so a search never fails on bad input.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MinimumRatingFilter, TextQueryFilter};
use catalog::EntryRef;

/// Parsed search criteria; `None` means "do not filter on this".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub text: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
}

/// Text parameter: empty text is absent, anything else is kept verbatim.
pub fn parse_text_param(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Rating threshold: surrounding whitespace is ignored; text that is not a
/// number is absent.
pub fn parse_min_rating_param(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

impl CatalogQuery {
    /// A query with no criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw `q`, `genre` and `minRating` parameters
    pub fn from_params(
        text: Option<&str>,
        genre: Option<&str>,
        min_rating: Option<&str>,
    ) -> Self {
        Self {
            text: parse_text_param(text),
            genre: parse_text_param(genre),
            min_rating: parse_min_rating_param(min_rating),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = parse_text_param(Some(text));
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = parse_text_param(Some(genre));
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating).filter(|v| !v.is_nan());
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.genre.is_none() && self.min_rating.is_none()
    }

    /// Pipeline applying the set criteria: text, then genre, then rating
    pub fn pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if let Some(text) = &self.text {
            pipeline = pipeline.add_filter(TextQueryFilter::new(text));
        }
        if let Some(genre) = &self.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.as_str()));
        }
        if let Some(min_rating) = self.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        pipeline
    }

    /// Run the query over a snapshot
    pub fn apply(&self, entries: Vec<EntryRef>) -> Vec<EntryRef> {
        self.pipeline().apply(entries)
    }
}
