use rand::Rng;

use crate::models::ScoredMovie;

/// Sampling weight for one candidate
///
/// The +1 offset keeps movies that scored exactly 0 selectable.
fn sampling_weight(item: &ScoredMovie) -> f64 {
    item.score + 1.0
}

/// Picks one movie at random, biased toward higher scores
///
/// `draw` must return values in [0, 1) and is injected so tests can supply
/// deterministic sequences. Returns `None` for an empty ranking; callers
/// show an empty state instead of a pick.
pub fn weighted_pick<'a>(
    ranked: &'a [ScoredMovie],
    mut draw: impl FnMut() -> f64,
) -> Option<&'a ScoredMovie> {
    if ranked.is_empty() {
        return None;
    }

    let total: f64 = ranked.iter().map(sampling_weight).sum();
    let mut remaining = draw() * total;

    for item in ranked {
        remaining -= sampling_weight(item);
        if remaining <= 0.0 {
            return Some(item);
        }
    }

    // Floating-point drift can leave a sliver of weight after the walk;
    // the last candidate is the defined fallback
    ranked.last()
}

/// `weighted_pick` driven by the thread-local RNG, for production callers
pub fn surprise_pick(ranked: &[ScoredMovie]) -> Option<&ScoredMovie> {
    let mut rng = rand::rng();
    let pick = weighted_pick(ranked, move || rng.random());

    if let Some(item) = pick {
        tracing::debug!(movie_id = item.movie.id, score = item.score, "Surprise pick");
    }

    pick
}
