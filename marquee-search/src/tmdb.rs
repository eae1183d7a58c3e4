//! TMDB movie listings over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{GENERIC_FETCH_FAILURE, MovieSearchError};
use crate::providers::MovieProvider;
use crate::types::{Movie, MovieQuery};

/// Default TMDB API v3 base URL.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TMDB client authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Listing response body.
///
/// A successful body carries `results`; a failed one carries
/// `Response: "False"` and an optional `Error` message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbResponse {
    /// Movies on the requested page
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    /// `"False"` when the request failed
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    /// Error message accompanying a failed response
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl TmdbResponse {
    /// Converts the body into a movie list, honouring the failure flag.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::ApiError` - The body has `Response: "False"`
    pub fn into_movies(self) -> Result<Vec<Movie>, MovieSearchError> {
        if self.response.as_deref() == Some("False") {
            return Err(MovieSearchError::ApiError {
                message: self
                    .error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| GENERIC_FETCH_FAILURE.to_string()),
            });
        }

        Ok(self.results.unwrap_or_default())
    }
}

impl TmdbClient {
    /// Creates a TMDB client for the given base URL and bearer token.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::ProviderError` - If the API key is blank or the HTTP client cannot be built
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, MovieSearchError> {
        if api_key.trim().is_empty() {
            return Err(MovieSearchError::ProviderError {
                reason: "TMDB API key is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MovieSearchError::ProviderError {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Full request URL for a query.
    pub fn url_for(&self, query: &MovieQuery) -> String {
        format!("{}{}", self.base_url, query.endpoint())
    }

    /// Fetches one page of movies for the query.
    ///
    /// # Errors
    ///
    /// - `MovieSearchError::NetworkError` - If the request could not be sent
    /// - `MovieSearchError::HttpStatus` - If the API answered with a non-2xx status
    /// - `MovieSearchError::ParseError` - If the body is not a listing
    /// - `MovieSearchError::ApiError` - If the body carries a failure flag
    pub async fn fetch(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError> {
        let url = self.url_for(query);
        tracing::debug!(%url, "Fetching movies from TMDB");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| MovieSearchError::NetworkError {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovieSearchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: TmdbResponse =
            response
                .json()
                .await
                .map_err(|e| MovieSearchError::ParseError {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        body.into_movies()
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError> {
        self.fetch(query).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
