use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// A single movie record from the discover listing
///
/// Mirrors the upstream TMDB payload. Numeric metrics are optional there;
/// missing values deserialize to 0 so the scoring pass never has to
/// special-case them. The engine treats records as immutable input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Stable upstream identifier
    pub id: u64,
    pub title: String,
    /// Average user rating in [0, 10]
    #[serde(default)]
    pub vote_average: f64,
    /// Upstream popularity index, unbounded above
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_count: u64,
    /// Release date; the upstream sends "" for unreleased or unknown dates
    #[serde(default, deserialize_with = "release_date_from_str")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl Movie {
    /// Calendar year of the release date, if known
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }
}

/// Deserialize an upstream release date, treating empty or malformed
/// strings as absent rather than failing the whole payload
fn release_date_from_str<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

/// One page of the popularity-sorted discover listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u64,
}

/// A genre catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Build an id-to-name lookup from the genre catalog
pub fn genre_map(genres: &[Genre]) -> HashMap<u64, String> {
    genres
        .iter()
        .map(|genre| (genre.id, genre.name.clone()))
        .collect()
}

/// Resolve a movie's genre ids against the catalog, skipping unknown ids
pub fn genre_names(ids: &[u64], map: &HashMap<u64, String>) -> Vec<String> {
    ids.iter()
        .filter_map(|id| map.get(id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "vote_average": 8.2,
            "popularity": 85.4,
            "vote_count": 24000,
            "release_date": "1999-03-31",
            "genre_ids": [28, 878],
            "overview": "A computer hacker learns the truth.",
            "poster_path": "/matrix.jpg",
            "original_language": "en"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 603);
        assert_eq!(movie.vote_average, 8.2);
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(1999, 3, 31));
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.genre_ids, vec![28, 878]);
    }

    #[test]
    fn test_missing_metrics_default_to_zero() {
        let json = r#"{"id": 1, "title": "Sparse"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.popularity, 0.0);
        assert_eq!(movie.vote_count, 0);
        assert_eq!(movie.release_date, None);
        assert!(movie.genre_ids.is_empty());
        assert!(movie.overview.is_empty());
    }

    #[test]
    fn test_empty_release_date_is_absent() {
        let json = r#"{"id": 2, "title": "Unannounced", "release_date": ""}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn test_malformed_release_date_is_absent() {
        let json = r#"{"id": 3, "title": "Odd", "release_date": "someday"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_date, None);
    }

    #[test]
    fn test_genre_map_and_names() {
        let genres = vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 878, name: "Science Fiction".to_string() },
        ];
        let map = genre_map(&genres);

        let names = genre_names(&[28, 878, 999], &map);
        assert_eq!(names, vec!["Action", "Science Fiction"]);
    }
}
