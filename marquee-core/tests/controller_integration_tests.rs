//! Integration tests for the search controller.
//!
//! These tests drive the actor through its public handle with mocked
//! collaborators and tokio's paused clock, covering debounce timing, fetch
//! outcomes, loading transitions and analytics side effects.

use std::sync::Arc;
use std::time::Duration;

use marquee_core::config::SearchConfig;
use marquee_core::controller::{
    ControllerError, ControllerHandle, MockMovieProvider, RecordingAnalytics, ResultsView,
    SearchSession, sample_movie, sample_trending, spawn_controller,
};
use marquee_search::{MovieQuery, MovieSearchError};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Test fixture wiring a controller to mock collaborators.
struct ControllerFixture {
    handle: ControllerHandle,
    provider: MockMovieProvider,
    analytics: RecordingAnalytics,
}

impl ControllerFixture {
    fn new() -> Self {
        Self::with(MockMovieProvider::new(), RecordingAnalytics::new())
    }

    fn with(provider: MockMovieProvider, analytics: RecordingAnalytics) -> Self {
        let config = SearchConfig {
            debounce: DEBOUNCE,
            trending_limit: 5,
        };
        let handle = spawn_controller(&config, provider.service(), Arc::new(analytics.clone()));

        Self {
            handle,
            provider,
            analytics,
        }
    }

    /// Lets spawned tasks run without crossing a debounce deadline.
    async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    async fn type_text(&self, text: &str) {
        self.handle.set_search_term(text).await.unwrap();
    }

    /// Types `text` and waits past the debounce window.
    async fn search(&self, text: &str) -> SearchSession {
        self.type_text(text).await;
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(10)).await;
        self.snapshot().await
    }

    async fn snapshot(&self) -> SearchSession {
        self.handle.snapshot().await.unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn test_start_fetches_popular_and_trending_once() {
    let analytics = RecordingAnalytics::new()
        .with_trending(vec![sample_trending("matrix", 4), sample_trending("alien", 2)]);
    let fixture = ControllerFixture::with(MockMovieProvider::new(), analytics);
    fixture.settle().await;

    let session = fixture.snapshot().await;
    assert_eq!(fixture.provider.calls(), vec![MovieQuery::Popular]);
    assert_eq!(session.movies, vec![sample_movie(1, "Popular Movie")]);
    assert!(!session.loading);
    assert_eq!(session.error_message, None);
    assert_eq!(session.trending.len(), 2);
    assert_eq!(session.trending[0].search_term, "matrix");

    fixture.search("dune").await;
    assert_eq!(fixture.analytics.trending_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_popular_results_are_not_recorded() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    assert!(fixture.analytics.recorded().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_raw_input_updates_immediately() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    fixture.type_text("mat").await;
    let session = fixture.snapshot().await;

    assert_eq!(session.search_term, "mat");
    assert_eq!(session.debounced_term, "");
    assert_eq!(fixture.provider.calls(), vec![MovieQuery::Popular]);
}

#[tokio::test(start_paused = true)]
async fn test_burst_typing_issues_one_fetch_with_final_text() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    for text in ["m", "ma", "mat", "matr", "matrix"] {
        fixture.type_text(text).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    // 400ms since the last keystroke: still inside the window.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(fixture.provider.calls(), vec![MovieQuery::Popular]);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(
        fixture.provider.calls(),
        vec![
            MovieQuery::Popular,
            MovieQuery::Search("matrix".to_string())
        ]
    );

    let session = fixture.snapshot().await;
    assert_eq!(session.debounced_term, "matrix");
    assert_eq!(session.movies[0].title, "matrix");
}

#[tokio::test(start_paused = true)]
async fn test_clearing_input_fetches_popular_again() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    fixture.search("alien").await;
    let session = fixture.search("").await;

    assert_eq!(
        fixture.provider.calls(),
        vec![
            MovieQuery::Popular,
            MovieQuery::Search("alien".to_string()),
            MovieQuery::Popular,
        ]
    );
    assert_eq!(session.movies, vec![sample_movie(1, "Popular Movie")]);
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_debounced_term_does_not_refetch() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    fixture.search("abc").await;
    fixture.type_text("abcd").await;
    fixture.type_text("abc").await;
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert_eq!(fixture.provider.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_api_error_message_is_shown_verbatim() {
    let provider = MockMovieProvider::new().with_response(
        MovieQuery::Search("zzz".to_string()),
        Err(MovieSearchError::ApiError {
            message: "X".to_string(),
        }),
    );
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;

    let session = fixture.search("zzz").await;

    assert_eq!(session.error_message.as_deref(), Some("X"));
    assert!(session.movies.is_empty());
    assert_eq!(session.results_view(), ResultsView::Error("X"));
    assert!(fixture.analytics.recorded().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_results_set_error_and_clear_list() {
    let provider = MockMovieProvider::new()
        .with_response(MovieQuery::Search("nothing".to_string()), Ok(Vec::new()));
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;

    let session = fixture.search("nothing").await;

    assert_eq!(session.error_message.as_deref(), Some("No movies found."));
    assert!(session.movies.is_empty());
    assert!(!session.loading);
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_shows_generic_message() {
    let provider = MockMovieProvider::new().with_response(
        MovieQuery::Search("down".to_string()),
        Err(MovieSearchError::NetworkError {
            reason: "connection refused".to_string(),
        }),
    );
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;

    let session = fixture.search("down").await;

    assert_eq!(
        session.error_message.as_deref(),
        Some("Failed to fetch movies. Please try again later.")
    );
    assert!(session.movies.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_error_clears_on_next_successful_fetch() {
    let provider = MockMovieProvider::new()
        .with_response(MovieQuery::Search("bad".to_string()), Ok(Vec::new()));
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;

    fixture.search("bad").await;
    let session = fixture.search("good").await;

    assert_eq!(session.error_message, None);
    assert_eq!(session.movies.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_successful_search_records_first_result_once() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    fixture.search("matrix").await;

    assert_eq!(
        fixture.analytics.recorded(),
        vec![("matrix".to_string(), sample_movie(100, "matrix"))]
    );
}

#[tokio::test(start_paused = true)]
async fn test_record_failure_is_swallowed() {
    let analytics = RecordingAnalytics::new().failing_record();
    let fixture = ControllerFixture::with(MockMovieProvider::new(), analytics);
    fixture.settle().await;

    let session = fixture.search("matrix").await;

    assert_eq!(fixture.analytics.recorded().len(), 1);
    assert_eq!(session.error_message, None);
    assert_eq!(session.movies.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_trending_failure_leaves_list_empty_without_error() {
    let analytics = RecordingAnalytics::new()
        .with_trending(vec![sample_trending("matrix", 4)])
        .failing_trending();
    let fixture = ControllerFixture::with(MockMovieProvider::new(), analytics);
    fixture.settle().await;

    let session = fixture.snapshot().await;

    assert_eq!(fixture.analytics.trending_calls(), 1);
    assert!(session.trending.is_empty());
    assert!(!session.shows_trending());
    assert_eq!(session.error_message, None);
}

#[tokio::test(start_paused = true)]
async fn test_loading_spans_an_outstanding_fetch() {
    let provider = MockMovieProvider::new()
        .with_delay(MovieQuery::Search("slow".to_string()), Duration::from_secs(1));
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;
    assert!(!fixture.snapshot().await.loading);

    let session = fixture.search("slow").await;
    assert!(session.loading);
    assert_eq!(session.results_view(), ResultsView::Loading);

    tokio::time::sleep(Duration::from_secs(1)).await;
    let session = fixture.snapshot().await;
    assert!(!session.loading);
    assert_eq!(session.movies[0].title, "slow");
}

#[tokio::test(start_paused = true)]
async fn test_late_response_overwrites_newer_results() {
    let provider = MockMovieProvider::new()
        .with_delay(MovieQuery::Search("first".to_string()), Duration::from_secs(2));
    let fixture = ControllerFixture::with(provider, RecordingAnalytics::new());
    fixture.settle().await;

    fixture.search("first").await;
    let session = fixture.search("second").await;
    assert_eq!(session.movies[0].title, "second");
    assert_eq!(session.fetch_generation, 3);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let session = fixture.snapshot().await;
    assert_eq!(session.debounced_term, "second");
    assert_eq!(session.movies[0].title, "first");
}

#[tokio::test(start_paused = true)]
async fn test_handle_reports_shutdown() {
    let fixture = ControllerFixture::new();
    fixture.settle().await;

    fixture.type_text("pending").await;
    fixture.handle.shutdown().await.unwrap();
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert_eq!(fixture.provider.calls(), vec![MovieQuery::Popular]);
    assert_eq!(
        fixture.handle.set_search_term("late").await,
        Err(ControllerError::Shutdown)
    );
    assert!(matches!(
        fixture.handle.snapshot().await,
        Err(ControllerError::Shutdown)
    ));
}
