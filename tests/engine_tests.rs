use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mockall::mock;

use cinerank::error::{AppError, AppResult};
use cinerank::models::{genre_map, Genre, Movie, MoviePage, WeightConfig};
use cinerank::services::explanation::explain;
use cinerank::services::favorites::{
    sort_favorites, FavoritesStore, InMemoryFavorites, SortCriteria,
};
use cinerank::services::filtering::MovieFilter;
use cinerank::services::providers::MovieProvider;
use cinerank::services::sampler::weighted_pick;
use cinerank::services::scoring::score_and_rank;

mock! {
    Provider {}

    #[async_trait]
    impl MovieProvider for Provider {
        async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage>;
        async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;
        fn name(&self) -> &'static str;
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn movie(
    id: u64,
    title: &str,
    rating: f64,
    popularity: f64,
    votes: u64,
    released: Option<(i32, u32, u32)>,
    genres: Vec<u64>,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        vote_average: rating,
        popularity,
        vote_count: votes,
        release_date: released.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        genre_ids: genres,
        overview: String::new(),
        poster_path: None,
        original_language: Some("en".to_string()),
    }
}

fn page(number: u32, total_pages: u32, results: Vec<Movie>) -> MoviePage {
    let total_results = results.len() as u64 * total_pages as u64;
    MoviePage {
        page: number,
        results,
        total_pages,
        total_results,
    }
}

#[test]
fn rating_dominates_when_it_is_the_only_weight() {
    let movies = vec![
        movie(1, "A", 8.0, 50.0, 1000, Some((2025, 6, 1)), vec![18]),
        movie(2, "B", 4.0, 10.0, 10, Some((2020, 6, 1)), vec![18]),
    ];
    let weights = WeightConfig::new(10.0, 0.0, 0.0, 0.0).unwrap();

    let ranked = score_and_rank(&movies, &weights, now());
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].movie.title, "A");
    assert_eq!(ranked[0].score, 100.0);
    assert_eq!(ranked[1].movie.title, "B");
    assert_eq!(ranked[1].score, 0.0);

    // A's rating normalized to 1.0 with a positive weight: one concrete reason
    let a_reasons = explain(&ranked[0].normalized, &weights);
    assert_eq!(a_reasons.len(), 1);
    assert!(a_reasons[0].contains("rated"));

    // B fails the threshold on every metric: the balanced fallback
    let b_reasons = explain(&ranked[1].normalized, &weights);
    assert_eq!(b_reasons.len(), 1);
    assert!(b_reasons[0].contains("Balanced"));
}

#[tokio::test]
async fn discover_filter_rank_and_pick_flow() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider.expect_fetch_popular().returning(|number| {
        let results = match number {
            1 => vec![
                movie(1, "Action Hit", 7.9, 400.0, 9000, Some((2025, 4, 10)), vec![28]),
                movie(2, "Quiet Drama", 8.3, 35.0, 2500, Some((2024, 11, 2)), vec![18]),
            ],
            _ => vec![
                movie(3, "Action Sleeper", 6.1, 20.0, 150, Some((2023, 7, 19)), vec![28]),
                movie(4, "Old Classic", 8.8, 55.0, 30000, Some((1975, 3, 1)), vec![18]),
            ],
        };
        Ok(page(number, 2, results))
    });
    provider.expect_fetch_genres().returning(|| {
        Ok(vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 18, name: "Drama".to_string() },
        ])
    });

    let movies = provider.fetch_popular_through(2).await.unwrap();
    assert_eq!(movies.len(), 4);

    let genres = genre_map(&provider.fetch_genres().await.unwrap());

    let filter = MovieFilter {
        genre: Some(28),
        ..Default::default()
    };
    assert_eq!(filter.summary(&genres), vec!["Genre: Action"]);

    let action_movies = filter.apply(&movies);
    assert_eq!(action_movies.len(), 2);

    let ranked = score_and_rank(&action_movies, &WeightConfig::default(), now());
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].movie.id, 1);
    assert!(ranked[0].score > ranked[1].score);

    // Deterministic draw at 0 always lands on the top-ranked movie
    let pick = weighted_pick(&ranked, || 0.0).unwrap();
    assert_eq!(pick.movie.id, 1);

    // Every explanation is non-empty, down to the weakest candidate
    for item in &ranked {
        assert!(!explain(&item.normalized, &WeightConfig::default()).is_empty());
    }
}

#[tokio::test]
async fn accumulation_stops_at_the_listing_end() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider
        .expect_fetch_popular()
        .times(2)
        .returning(|number| {
            let results = vec![movie(
                number as u64,
                "Any",
                5.0,
                1.0,
                1,
                Some((2024, 1, 1)),
                vec![],
            )];
            Ok(page(number, 2, results))
        });

    // Asking for five pages only fetches the two that exist
    let movies = provider.fetch_popular_through(5).await.unwrap();
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn provider_errors_propagate() {
    let mut provider = MockProvider::new();
    provider.expect_name().return_const("mock");
    provider
        .expect_fetch_popular()
        .returning(|_| Err(AppError::ExternalApi("upstream unavailable".to_string())));

    let result = provider.fetch_popular_through(3).await;
    assert!(matches!(result, Err(AppError::ExternalApi(_))));
}

#[test]
fn empty_collection_yields_empty_state() {
    let ranked = score_and_rank(&[], &WeightConfig::default(), now());
    assert!(ranked.is_empty());
    assert!(weighted_pick(&ranked, || 0.5).is_none());
}

#[test]
fn favorites_flow_over_ranked_results() {
    let movies = vec![
        movie(1, "Alien", 8.5, 90.0, 14000, Some((1979, 5, 25)), vec![27]),
        movie(2, "Zodiac", 7.7, 45.0, 11000, Some((2007, 3, 2)), vec![80]),
        movie(3, "Memento", 8.2, 60.0, 13000, Some((2000, 10, 11)), vec![53]),
    ];
    let ranked = score_and_rank(&movies, &WeightConfig::default(), now());

    let mut store = InMemoryFavorites::new();
    for (offset, item) in ranked.iter().take(2).enumerate() {
        let added_at = now() + chrono::Duration::minutes(offset as i64);
        assert!(store.add(item.movie.clone(), added_at));
    }
    assert_eq!(store.all().len(), 2);

    // Re-adding the top pick is a no-op
    assert!(!store.add(ranked[0].movie.clone(), now()));

    let by_rating = sort_favorites(store.all(), SortCriteria::RatingDesc);
    assert!(by_rating[0].movie.vote_average >= by_rating[1].movie.vote_average);
}
