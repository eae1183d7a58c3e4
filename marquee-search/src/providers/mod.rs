//! Provider implementations for movie listings.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::{Movie, MovieQuery};

pub mod demo;

pub use demo::DemoProvider;

/// Trait for movie listing providers.
///
/// Implementations fetch movies through different backends (the TMDB API,
/// an offline demo catalogue, test doubles).
#[async_trait]
pub trait MovieProvider: Send + Sync + std::fmt::Debug {
    /// Fetches movies for a popular listing or a title search.
    ///
    /// An empty vector is a successful response with no matches.
    ///
    /// # Errors
    /// - `MovieSearchError::NetworkError` - Network connectivity issues
    /// - `MovieSearchError::HttpStatus` - Non-success response status
    /// - `MovieSearchError::ParseError` - Undecodable response body
    /// - `MovieSearchError::ApiError` - Response flagged as failed
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
