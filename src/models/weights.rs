use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// The four scored metrics, in canonical display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Rating,
    Popularity,
    Recency,
    VoteCount,
}

impl Metric {
    /// Canonical metric order, used to break contribution ties
    pub const ALL: [Metric; 4] = [
        Metric::Rating,
        Metric::Popularity,
        Metric::Recency,
        Metric::VoteCount,
    ];
}

/// Per-metric weights applied when combining normalized metrics
///
/// Values come straight from the UI sliders. Any non-negative finite value
/// is legal; there is no upper bound. A config of all zeros is valid and
/// yields a composite score of 0 for every movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightConfig {
    pub rating: f64,
    pub popularity: f64,
    pub recency: f64,
    pub vote_count: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            rating: 5.0,
            popularity: 5.0,
            recency: 5.0,
            vote_count: 5.0,
        }
    }
}

impl WeightConfig {
    /// Creates a validated weight configuration
    pub fn new(rating: f64, popularity: f64, recency: f64, vote_count: f64) -> AppResult<Self> {
        let weights = Self {
            rating,
            popularity,
            recency,
            vote_count,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Rejects negative or non-finite weights
    ///
    /// Called at the boundary (config loading, UI input); the scoring pass
    /// assumes weights are already well-formed.
    pub fn validate(&self) -> AppResult<()> {
        for metric in Metric::ALL {
            let weight = self.weight_of(metric);
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "weight for {:?} must be a non-negative number, got {}",
                    metric, weight
                )));
            }
        }
        Ok(())
    }

    /// Weight assigned to a single metric
    pub fn weight_of(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Rating => self.rating,
            Metric::Popularity => self.popularity,
            Metric::Recency => self.recency,
            Metric::VoteCount => self.vote_count,
        }
    }

    /// Sum of all four weights
    pub fn total(&self) -> f64 {
        self.rating + self.popularity + self.recency + self.vote_count
    }
}
