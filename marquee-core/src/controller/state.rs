//! Search session state and its single transition function.
//!
//! Every mutation of the session goes through [`SearchSession::apply`], which
//! returns the side effects the actor has to carry out. Keeping effects as
//! data lets the transition rules be tested without a runtime.

use marquee_search::{Movie, MovieQuery, MovieSearchError};
use serde::Serialize;

use crate::analytics::TrendingRecord;

/// Everything the page needs to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSession {
    /// Raw text of the search box, updated on every keystroke
    pub search_term: String,
    /// Search text after the quiet period; drives fetches
    pub debounced_term: String,
    pub movies: Vec<Movie>,
    /// True while the most recently started fetch has not been applied
    pub loading: bool,
    pub error_message: Option<String>,
    pub trending: Vec<TrendingRecord>,
    /// Number of fetches started so far
    pub fetch_generation: u64,
}

/// Inputs to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Controller started; performs the initial popular fetch and trending load.
    Started,
    /// Search box text changed.
    InputChanged(String),
    /// Input stayed unchanged for the debounce window.
    DebounceElapsed(String),
    /// A movie fetch finished.
    FetchCompleted {
        generation: u64,
        query: MovieQuery,
        result: Result<Vec<Movie>, MovieSearchError>,
    },
    /// Trending list arrived (empty on backend failure).
    TrendingLoaded(Vec<TrendingRecord>),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Restart the debounce window for this text.
    ScheduleDebounce(String),
    /// Fetch movies in the background and report back.
    FetchMovies { generation: u64, query: MovieQuery },
    /// Record the top result of a search, fire-and-forget.
    RecordSearch { search_term: String, movie: Movie },
    /// Load the trending list in the background and report back.
    LoadTrending,
}

impl SearchSession {
    /// Creates an idle session with empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the effects to perform, in order.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::Started => {
                let fetch = self.start_fetch();
                vec![fetch, Effect::LoadTrending]
            }
            SessionEvent::InputChanged(text) => {
                self.search_term = text.clone();
                vec![Effect::ScheduleDebounce(text)]
            }
            SessionEvent::DebounceElapsed(text) => {
                if text == self.debounced_term {
                    tracing::trace!(term = %text, "Debounced term unchanged, no fetch");
                    return Vec::new();
                }
                self.debounced_term = text;
                vec![self.start_fetch()]
            }
            SessionEvent::FetchCompleted {
                generation,
                query,
                result,
            } => self.complete_fetch(generation, query, result),
            SessionEvent::TrendingLoaded(records) => {
                tracing::debug!(count = records.len(), "Trending list loaded");
                self.trending = records;
                Vec::new()
            }
        }
    }

    fn start_fetch(&mut self) -> Effect {
        self.fetch_generation += 1;
        self.loading = true;
        self.error_message = None;

        let query = MovieQuery::from_term(&self.debounced_term);
        tracing::debug!(generation = self.fetch_generation, %query, "Starting movie fetch");

        Effect::FetchMovies {
            generation: self.fetch_generation,
            query,
        }
    }

    fn complete_fetch(
        &mut self,
        generation: u64,
        query: MovieQuery,
        result: Result<Vec<Movie>, MovieSearchError>,
    ) -> Vec<Effect> {
        // Superseded results are applied as they arrive; out-of-order
        // completions can briefly show an older query's movies.
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                latest = self.fetch_generation,
                %query,
                "Applying result of a superseded fetch"
            );
        }

        self.loading = false;

        match result {
            Ok(movies) => {
                self.error_message = None;
                let record = match (query.term(), movies.first()) {
                    (Some(term), Some(top)) => vec![Effect::RecordSearch {
                        search_term: term.to_string(),
                        movie: top.clone(),
                    }],
                    _ => Vec::new(),
                };
                self.movies = movies;
                record
            }
            Err(e) => {
                tracing::warn!(%query, error = %e, "Movie fetch failed");
                self.error_message = Some(e.user_message());
                self.movies.clear();
                Vec::new()
            }
        }
    }

    /// What the results section should show, in priority order.
    pub fn results_view(&self) -> ResultsView<'_> {
        if self.loading {
            ResultsView::Loading
        } else if let Some(message) = &self.error_message {
            ResultsView::Error(message)
        } else {
            ResultsView::Movies(&self.movies)
        }
    }

    /// Whether the trending section should be rendered at all.
    pub fn shows_trending(&self) -> bool {
        !self.trending.is_empty()
    }
}

/// Mutually exclusive content of the results section.
#[derive(Debug, PartialEq)]
pub enum ResultsView<'a> {
    Loading,
    Error(&'a str),
    Movies(&'a [Movie]),
}
