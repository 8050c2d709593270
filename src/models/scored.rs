use serde::Serialize;

use super::movie::Movie;
use super::weights::Metric;

/// Normalized [0, 1] metric values for one movie within one scoring pass
///
/// Recency is stored inverted: a recent release has a value near 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedMetrics {
    pub rating: f64,
    pub popularity: f64,
    pub recency: f64,
    pub vote_count: f64,
}

impl NormalizedMetrics {
    /// Normalized value of a single metric
    pub fn value_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Rating => self.rating,
            Metric::Popularity => self.popularity,
            Metric::Recency => self.recency,
            Metric::VoteCount => self.vote_count,
        }
    }
}

/// A movie together with its composite score for the current weights
///
/// Recomputed on every scoring pass and handed to the rendering layer;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMovie {
    pub movie: Movie,
    /// Composite score in [0, 100]
    pub score: f64,
    pub normalized: NormalizedMetrics,
}
