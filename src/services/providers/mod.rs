/// Movie data provider abstraction
///
/// The engine never fetches anything itself; a provider hands it movie
/// pages and the genre catalog. Implementations live in the host app
/// (an HTTP client against the upstream API, a fixture loader in tests).
use crate::{
    error::AppResult,
    models::{Genre, Movie, MoviePage},
};

/// Trait for movie data providers
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch one page of the popularity-sorted discover listing
    async fn fetch_popular(&self, page: u32) -> AppResult<MoviePage>;

    /// Fetch the genre catalog for id-to-name resolution
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;

    /// Fetch and concatenate discover pages 1 through `through_page`
    ///
    /// Mirrors the "load more" accumulation in the UI: each page is
    /// appended to the collection handed to the scoring pass. Stops early
    /// at the listing's last page.
    async fn fetch_popular_through(&self, through_page: u32) -> AppResult<Vec<Movie>> {
        let mut movies = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_popular(page).await?;
            let total_pages = batch.total_pages;
            movies.extend(batch.results);

            if page >= through_page || page >= total_pages {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            provider = self.name(),
            pages = page,
            fetched = movies.len(),
            "Fetched discover listing"
        );

        Ok(movies)
    }

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
