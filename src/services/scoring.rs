use chrono::{DateTime, Utc};

use crate::models::{Movie, NormalizedMetrics, ScoredMovie, WeightConfig};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Observed min/max for one metric across a collection snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn widen(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Dataset-wide bounds for all four metrics
///
/// Recency bounds are over fractional days elapsed since release relative
/// to the caller's `now`, not over the raw dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    pub rating: MetricRange,
    pub popularity: MetricRange,
    pub recency: MetricRange,
    pub vote_count: MetricRange,
}

impl DatasetStats {
    /// Computes min/max for every metric in one pass over the collection
    ///
    /// Returns `None` for an empty collection; bounds are meaningless there
    /// and the scorer short-circuits to an empty ranking instead.
    pub fn compute(movies: &[Movie], now: DateTime<Utc>) -> Option<Self> {
        let (first, rest) = movies.split_first()?;

        let mut stats = Self {
            rating: MetricRange::point(first.vote_average),
            popularity: MetricRange::point(first.popularity),
            recency: MetricRange::point(days_since_release(first, now)),
            vote_count: MetricRange::point(first.vote_count as f64),
        };

        for movie in rest {
            stats.rating.widen(movie.vote_average);
            stats.popularity.widen(movie.popularity);
            stats.recency.widen(days_since_release(movie, now));
            stats.vote_count.widen(movie.vote_count as f64);
        }

        Some(stats)
    }
}

/// Fractional days elapsed between a movie's release and `now`
///
/// Undated movies fall back to the Unix epoch so they rank as maximally
/// old.
pub fn days_since_release(movie: &Movie, now: DateTime<Utc>) -> f64 {
    let release: DateTime<Utc> = match movie.release_date {
        Some(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
        None => DateTime::UNIX_EPOCH,
    };
    now.signed_duration_since(release).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Min-max scale `value` into [0, 1]
///
/// A collapsed range (every movie shares the value, including the
/// single-movie case) maps to the neutral 0.5 rather than 0 or 1.
pub fn normalize(value: f64, range: MetricRange) -> f64 {
    if range.max == range.min {
        return 0.5;
    }
    (value - range.min) / (range.max - range.min)
}

fn normalized_metrics(movie: &Movie, stats: &DatasetStats, now: DateTime<Utc>) -> NormalizedMetrics {
    NormalizedMetrics {
        rating: normalize(movie.vote_average, stats.rating),
        popularity: normalize(movie.popularity, stats.popularity),
        // Inverted: fewer days since release ranks higher
        recency: 1.0 - normalize(days_since_release(movie, now), stats.recency),
        vote_count: normalize(movie.vote_count as f64, stats.vote_count),
    }
}

fn composite(normalized: &NormalizedMetrics, weights: &WeightConfig) -> f64 {
    let total_weight = weights.total();
    if total_weight == 0.0 {
        return 0.0;
    }

    let weighted = normalized.rating * weights.rating
        + normalized.popularity * weights.popularity
        + normalized.recency * weights.recency
        + normalized.vote_count * weights.vote_count;

    weighted / total_weight * 100.0
}

/// Composite 0-100 score for a single movie against precomputed bounds
pub fn score(
    movie: &Movie,
    weights: &WeightConfig,
    stats: &DatasetStats,
    now: DateTime<Utc>,
) -> f64 {
    composite(&normalized_metrics(movie, stats, now), weights)
}

/// Scores every movie in the collection and sorts best-first
///
/// Pure function of its inputs: bounds are computed over this snapshot
/// only, and repeated calls with the same arguments yield the same
/// ordering. Equal scores keep their input order (stable sort).
pub fn score_and_rank(
    movies: &[Movie],
    weights: &WeightConfig,
    now: DateTime<Utc>,
) -> Vec<ScoredMovie> {
    let Some(stats) = DatasetStats::compute(movies, now) else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredMovie> = movies
        .iter()
        .map(|movie| {
            let normalized = normalized_metrics(movie, &stats, now);
            ScoredMovie {
                movie: movie.clone(),
                score: composite(&normalized, weights),
                normalized,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        count = scored.len(),
        total_weight = weights.total(),
        "Scored and ranked collection"
    );

    scored
}
