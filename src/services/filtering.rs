use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Movie;

/// Client-side filter criteria mirroring the discover controls
///
/// `None` fields are inactive and match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieFilter {
    /// Genre id the movie must carry
    pub genre: Option<u64>,
    /// Exact primary release year
    pub release_year: Option<i32>,
    /// Minimum average rating, inclusive
    pub min_rating: Option<f64>,
    /// Original language code, e.g. "fr"
    pub language: Option<String>,
}

impl MovieFilter {
    /// True when at least one criterion is set
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Resets every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single movie passes every active criterion
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(genre) = self.genre {
            if !movie.genre_ids.contains(&genre) {
                return false;
            }
        }
        if let Some(year) = self.release_year {
            if movie.release_year() != Some(year) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if movie.vote_average < min_rating {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if movie.original_language.as_deref() != Some(language.as_str()) {
                return false;
            }
        }
        true
    }

    /// Filters a collection snapshot down to the matching movies
    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        movies
            .iter()
            .filter(|movie| self.matches(movie))
            .cloned()
            .collect()
    }

    /// Labels for the active filter chips
    ///
    /// Genre ids resolve through the catalog map; an unknown id falls back
    /// to the raw number.
    pub fn summary(&self, genres: &HashMap<u64, String>) -> Vec<String> {
        let mut labels = Vec::new();

        if let Some(genre) = self.genre {
            let name = genres
                .get(&genre)
                .cloned()
                .unwrap_or_else(|| genre.to_string());
            labels.push(format!("Genre: {}", name));
        }
        if let Some(year) = self.release_year {
            labels.push(format!("Year: {}", year));
        }
        if let Some(min_rating) = self.min_rating {
            labels.push(format!("Rating: {}+", min_rating));
        }
        if let Some(language) = &self.language {
            labels.push(format!("Language: {}", language));
        }

        labels
    }
}
