use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Movie;

/// A favorited movie plus the instant it was saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub movie: Movie,
    pub added_at: DateTime<Utc>,
}

/// Sort orders offered by the favorites view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriteria {
    DateDesc,
    DateAsc,
    RatingDesc,
    RatingAsc,
    TitleAsc,
    TitleDesc,
}

/// Store abstraction for the favorites list, keyed by movie id
///
/// Persistence lives outside the engine; implementations back this with
/// whatever storage the host app uses. The in-memory implementation below
/// is enough for tests and ephemeral sessions.
pub trait FavoritesStore {
    /// Snapshot of every saved entry
    fn all(&self) -> Vec<FavoriteEntry>;

    /// Saves a movie; returns false when it is already present
    fn add(&mut self, movie: Movie, added_at: DateTime<Utc>) -> bool;

    /// Removes the entry with the given movie id, if any
    fn remove(&mut self, movie_id: u64);

    fn is_favorite(&self, movie_id: u64) -> bool;

    fn clear(&mut self);
}

/// Vec-backed favorites store
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    entries: Vec<FavoriteEntry>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn all(&self) -> Vec<FavoriteEntry> {
        self.entries.clone()
    }

    fn add(&mut self, movie: Movie, added_at: DateTime<Utc>) -> bool {
        if self.is_favorite(movie.id) {
            return false;
        }
        self.entries.push(FavoriteEntry { movie, added_at });
        true
    }

    fn remove(&mut self, movie_id: u64) {
        self.entries.retain(|entry| entry.movie.id != movie_id);
    }

    fn is_favorite(&self, movie_id: u64) -> bool {
        self.entries.iter().any(|entry| entry.movie.id == movie_id)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Sorts a favorites snapshot by the requested criteria
///
/// Title comparisons are case-insensitive.
pub fn sort_favorites(mut favorites: Vec<FavoriteEntry>, criteria: SortCriteria) -> Vec<FavoriteEntry> {
    use std::cmp::Ordering;

    match criteria {
        SortCriteria::DateDesc => favorites.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        SortCriteria::DateAsc => favorites.sort_by(|a, b| a.added_at.cmp(&b.added_at)),
        SortCriteria::RatingDesc => favorites.sort_by(|a, b| {
            b.movie
                .vote_average
                .partial_cmp(&a.movie.vote_average)
                .unwrap_or(Ordering::Equal)
        }),
        SortCriteria::RatingAsc => favorites.sort_by(|a, b| {
            a.movie
                .vote_average
                .partial_cmp(&b.movie.vote_average)
                .unwrap_or(Ordering::Equal)
        }),
        SortCriteria::TitleAsc => favorites
            .sort_by(|a, b| a.movie.title.to_lowercase().cmp(&b.movie.title.to_lowercase())),
        SortCriteria::TitleDesc => favorites
            .sort_by(|a, b| b.movie.title.to_lowercase().cmp(&a.movie.title.to_lowercase())),
    }

    favorites
}

/// Mean rating across the list, `None` when empty
pub fn average_rating(favorites: &[FavoriteEntry]) -> Option<f64> {
    if favorites.is_empty() {
        return None;
    }
    let sum: f64 = favorites.iter().map(|entry| entry.movie.vote_average).sum();
    Some(sum / favorites.len() as f64)
}
