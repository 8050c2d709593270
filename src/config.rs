use serde::Deserialize;

use crate::models::WeightConfig;

/// Engine configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Starting weight for the rating metric
    #[serde(default = "default_weight")]
    pub rating_weight: f64,

    /// Starting weight for the popularity metric
    #[serde(default = "default_weight")]
    pub popularity_weight: f64,

    /// Starting weight for the recency metric
    #[serde(default = "default_weight")]
    pub recency_weight: f64,

    /// Starting weight for the vote count metric
    #[serde(default = "default_weight")]
    pub vote_count_weight: f64,

    /// How many pages of the discover listing to accumulate on startup
    #[serde(default = "default_discover_pages")]
    pub discover_pages: u32,
}

fn default_weight() -> f64 {
    5.0
}

fn default_discover_pages() -> u32 {
    1
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Weights are validated here so malformed values never reach the
    /// scoring pass.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config: Config =
            envy::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config
            .weights()
            .validate()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config)
    }

    /// Starting weights for the scoring sliders
    pub fn weights(&self) -> WeightConfig {
        WeightConfig {
            rating: self.rating_weight,
            popularity: self.popularity_weight,
            recency: self.recency_weight,
            vote_count: self.vote_count_weight,
        }
    }
}
