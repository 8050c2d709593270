use crate::models::{Metric, NormalizedMetrics, WeightConfig};

/// Minimum normalized value before a metric can justify a recommendation
const REASON_THRESHOLD: f64 = 0.6;

/// Shown when no single metric stands out
const FALLBACK_REASON: &str = "Balanced score across all criteria";

fn reason_for(metric: Metric) -> &'static str {
    match metric {
        Metric::Rating => "Highly rated by viewers",
        Metric::Popularity => "Trending strongly right now",
        Metric::Recency => "Released recently",
        Metric::VoteCount => "Backed by a large number of votes",
    }
}

/// Derives the human-readable reasons behind a movie's score
///
/// A metric qualifies only when its normalized value reaches the threshold
/// and its weight is positive; a zero-weighted metric never produces a
/// reason no matter how high its value. Qualifying reasons are ordered by
/// contribution (normalized value times weight) descending, with ties kept
/// in canonical metric order. The result is never empty.
pub fn explain(normalized: &NormalizedMetrics, weights: &WeightConfig) -> Vec<String> {
    let mut contributions: Vec<(Metric, f64)> = Metric::ALL
        .into_iter()
        .filter(|&metric| {
            weights.weight_of(metric) > 0.0 && normalized.value_of(metric) >= REASON_THRESHOLD
        })
        .map(|metric| {
            (
                metric,
                normalized.value_of(metric) * weights.weight_of(metric),
            )
        })
        .collect();

    contributions.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if contributions.is_empty() {
        return vec![FALLBACK_REASON.to_string()];
    }

    contributions
        .into_iter()
        .map(|(metric, _)| reason_for(metric).to_string())
        .collect()
}
