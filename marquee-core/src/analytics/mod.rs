//! Search analytics: tallies of which search terms led to which movie.
//!
//! The controller records the top result of every successful non-empty search
//! and reads the most frequent terms back as the trending list. Both calls are
//! best-effort: recording failures are logged by the caller and trending
//! failures collapse to an empty list.

use async_trait::async_trait;
use marquee_search::Movie;
use serde::{Deserialize, Serialize};

pub mod appwrite;
pub mod memory;

pub use appwrite::AppwriteAnalytics;
pub use memory::InMemoryAnalytics;

/// Errors raised by analytics backends.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Analytics request failed: {reason}")]
    Request { reason: String },

    #[error("Analytics store returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to parse analytics response: {reason}")]
    Parse { reason: String },

    #[error("Analytics backend unavailable: {reason}")]
    Unavailable { reason: String },
}

/// A stored tally for one search term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingRecord {
    /// Store-assigned document id
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_url: String,
}

/// Document body for a first-time search term.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTrendingRecord {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    pub title: String,
    pub poster_url: String,
}

impl NewTrendingRecord {
    /// Builds the initial record for a term and its top movie.
    pub fn from_search(search_term: &str, movie: &Movie) -> Self {
        Self {
            search_term: search_term.to_string(),
            count: 1,
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url_or_placeholder(),
        }
    }

    /// Attaches a document id.
    pub fn into_record(self, id: String) -> TrendingRecord {
        TrendingRecord {
            id,
            search_term: self.search_term,
            count: self.count,
            movie_id: self.movie_id,
            title: self.title,
            poster_url: self.poster_url,
        }
    }
}

/// Backend storing search tallies.
#[async_trait]
pub trait SearchAnalytics: Send + Sync + std::fmt::Debug {
    /// Increments the tally for `search_term`, creating it with count 1 and
    /// the movie's id, title and poster when absent.
    ///
    /// # Errors
    /// - `AnalyticsError::Request` - The store could not be reached
    /// - `AnalyticsError::UnexpectedStatus` - The store rejected the call
    /// - `AnalyticsError::Parse` - The store's answer was not understood
    async fn record_search(&self, search_term: &str, movie: &Movie) -> Result<(), AnalyticsError>;

    /// Returns up to `limit` records ordered by descending count.
    ///
    /// # Errors
    /// - `AnalyticsError::Request` - The store could not be reached
    /// - `AnalyticsError::UnexpectedStatus` - The store rejected the call
    /// - `AnalyticsError::Parse` - The store's answer was not understood
    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingRecord>, AnalyticsError>;

    /// Trending list for display; any backend error yields an empty list.
    async fn trending(&self, limit: usize) -> Vec<TrendingRecord> {
        match self.top_searches(limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    backend = self.name(),
                    error = %e,
                    "Failed to load trending searches"
                );
                Vec::new()
            }
        }
    }

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
