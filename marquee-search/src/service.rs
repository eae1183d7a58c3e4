//! Movie search service used by the application controller.

use std::sync::Arc;

use crate::errors::MovieSearchError;
use crate::providers::{DemoProvider, MovieProvider};
use crate::tmdb::TmdbClient;
use crate::types::{Movie, MovieQuery};

/// Movie search service wrapping a shared provider.
///
/// Cloning is cheap; clones share the provider.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    provider: Arc<dyn MovieProvider>,
}

impl MovieSearchService {
    /// Creates a service over any provider.
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self { provider }
    }

    /// Creates a service backed by the TMDB API.
    pub fn with_tmdb(client: TmdbClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Creates a service backed by the offline demo catalogue.
    pub fn new_demo() -> Self {
        Self::new(Arc::new(DemoProvider::new()))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Fetches movies for a query, treating an empty listing as a failure.
    ///
    /// # Errors
    /// - `MovieSearchError::NoResults` - The provider returned no movies
    /// - Any error the provider reports
    pub async fn fetch(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError> {
        let movies = self.provider.fetch_movies(query).await?;

        if movies.is_empty() {
            tracing::debug!(provider = self.provider.name(), %query, "No movies found");
            return Err(MovieSearchError::NoResults);
        }

        tracing::debug!(
            provider = self.provider.name(),
            %query,
            count = movies.len(),
            "Fetched movies"
        );
        Ok(movies)
    }
}

impl Default for MovieSearchService {
    fn default() -> Self {
        Self::new_demo()
    }
}
