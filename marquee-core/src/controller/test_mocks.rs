//! Mock collaborators for testing the search controller.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use marquee_search::{Movie, MovieProvider, MovieQuery, MovieSearchError, MovieSearchService};
use parking_lot::Mutex;

use crate::analytics::{AnalyticsError, SearchAnalytics, TrendingRecord};

/// Builds a movie with a fixed rating and language.
pub fn sample_movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        vote_average: Some(7.5),
        poster_path: Some(format!("/poster-{id}.jpg")),
        release_date: Some("2020-01-01".to_string()),
        original_language: "en".to_string(),
    }
}

/// Builds a trending record for a term.
pub fn sample_trending(search_term: &str, count: u64) -> TrendingRecord {
    TrendingRecord {
        id: format!("doc-{search_term}"),
        search_term: search_term.to_string(),
        count,
        movie_id: count,
        title: search_term.to_string(),
        poster_url: format!("https://image.tmdb.org/t/p/w500/{search_term}.jpg"),
    }
}

type Outcome = Result<Vec<Movie>, MovieSearchError>;

#[derive(Debug, Default)]
struct ProviderState {
    calls: Mutex<Vec<MovieQuery>>,
    responses: Mutex<HashMap<MovieQuery, Outcome>>,
    delays: Mutex<HashMap<MovieQuery, Duration>>,
}

/// Movie provider with scripted responses and a call log.
///
/// Unscripted popular queries return one movie; unscripted searches return
/// two movies, the first titled with the search text.
#[derive(Debug, Clone, Default)]
pub struct MockMovieProvider {
    state: Arc<ProviderState>,
}

impl MockMovieProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, query: MovieQuery, outcome: Outcome) -> Self {
        self.state.responses.lock().insert(query, outcome);
        self
    }

    /// Delays the answer for `query` by `delay` (tokio time).
    pub fn with_delay(self, query: MovieQuery, delay: Duration) -> Self {
        self.state.delays.lock().insert(query, delay);
        self
    }

    /// Every query received, in order.
    pub fn calls(&self) -> Vec<MovieQuery> {
        self.state.calls.lock().clone()
    }

    /// A search service sharing this mock's state.
    pub fn service(&self) -> MovieSearchService {
        MovieSearchService::new(Arc::new(self.clone()))
    }
}

#[async_trait]
impl MovieProvider for MockMovieProvider {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError> {
        self.state.calls.lock().push(query.clone());

        let delay = self.state.delays.lock().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(outcome) = self.state.responses.lock().get(query).cloned() {
            return outcome;
        }

        Ok(match query {
            MovieQuery::Popular => vec![sample_movie(1, "Popular Movie")],
            MovieQuery::Search(text) => {
                vec![sample_movie(100, text), sample_movie(101, &format!("{text} II"))]
            }
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[derive(Debug, Default)]
struct AnalyticsState {
    recorded: Mutex<Vec<(String, Movie)>>,
    trending: Mutex<Vec<TrendingRecord>>,
    trending_calls: AtomicUsize,
    fail_record: AtomicBool,
    fail_trending: AtomicBool,
}

/// Analytics backend that logs calls and can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    state: Arc<AnalyticsState>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trending(self, records: Vec<TrendingRecord>) -> Self {
        *self.state.trending.lock() = records;
        self
    }

    /// Replaces the records served by later `top_searches` calls.
    pub fn set_trending(&self, records: Vec<TrendingRecord>) {
        *self.state.trending.lock() = records;
    }

    pub fn failing_record(self) -> Self {
        self.state.fail_record.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_trending(self) -> Self {
        self.state.fail_trending.store(true, Ordering::SeqCst);
        self
    }

    /// Every `record_search` call, successful or not, in order.
    pub fn recorded(&self) -> Vec<(String, Movie)> {
        self.state.recorded.lock().clone()
    }

    pub fn trending_calls(&self) -> usize {
        self.state.trending_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchAnalytics for RecordingAnalytics {
    async fn record_search(&self, search_term: &str, movie: &Movie) -> Result<(), AnalyticsError> {
        self.state
            .recorded
            .lock()
            .push((search_term.to_string(), movie.clone()));

        if self.state.fail_record.load(Ordering::SeqCst) {
            return Err(AnalyticsError::Unavailable {
                reason: "record disabled".to_string(),
            });
        }
        Ok(())
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        self.state.trending_calls.fetch_add(1, Ordering::SeqCst);

        if self.state.fail_trending.load(Ordering::SeqCst) {
            return Err(AnalyticsError::UnexpectedStatus {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        let mut records = self.state.trending.lock().clone();
        records.truncate(limit);
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
