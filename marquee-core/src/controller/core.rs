//! Search controller: owns the session and performs its effects.

use std::sync::Arc;
use std::time::Duration;

use marquee_search::MovieSearchService;
use tokio::sync::mpsc;

use super::commands::ControllerEvent;
use super::debounce::Debouncer;
use super::state::{Effect, SearchSession, SessionEvent};
use crate::analytics::SearchAnalytics;

/// Owns the [`SearchSession`] and turns its effects into tasks.
///
/// Runs inside the actor task only, so session state needs no locking.
/// Spawned tasks report back through `events`.
pub struct SearchController {
    session: SearchSession,
    debouncer: Debouncer,
    search: MovieSearchService,
    analytics: Arc<dyn SearchAnalytics>,
    trending_limit: usize,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

impl SearchController {
    pub fn new(
        debounce: Duration,
        trending_limit: usize,
        search: MovieSearchService,
        analytics: Arc<dyn SearchAnalytics>,
        events: mpsc::UnboundedSender<ControllerEvent>,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            debouncer: Debouncer::new(debounce),
            search,
            analytics,
            trending_limit,
            events,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Applies an event to the session and performs the resulting effects.
    pub fn dispatch(&mut self, event: SessionEvent) {
        for effect in self.session.apply(event) {
            self.perform(effect);
        }
    }

    /// Routes a task completion, dropping superseded debounce callbacks.
    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::DebounceElapsed { ticket, text } => {
                if self.debouncer.is_current(ticket) {
                    self.dispatch(SessionEvent::DebounceElapsed(text));
                } else {
                    tracing::trace!(ticket, "Ignoring superseded debounce");
                }
            }
            ControllerEvent::Completed(event) => self.dispatch(event),
        }
    }

    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleDebounce(text) => {
                let events = self.events.clone();
                self.debouncer.schedule(move |ticket| async move {
                    let _ = events.send(ControllerEvent::DebounceElapsed { ticket, text });
                });
            }

            Effect::FetchMovies { generation, query } => {
                let search = self.search.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = search.fetch(&query).await;
                    let _ = events.send(ControllerEvent::Completed(SessionEvent::FetchCompleted {
                        generation,
                        query,
                        result,
                    }));
                });
            }

            Effect::RecordSearch { search_term, movie } => {
                let analytics = self.analytics.clone();
                tokio::spawn(async move {
                    if let Err(e) = analytics.record_search(&search_term, &movie).await {
                        tracing::warn!(
                            backend = analytics.name(),
                            %search_term,
                            error = %e,
                            "Failed to record search"
                        );
                    }
                });
            }

            Effect::LoadTrending => {
                let analytics = self.analytics.clone();
                let events = self.events.clone();
                let limit = self.trending_limit;
                tokio::spawn(async move {
                    let records = analytics.trending(limit).await;
                    let _ = events.send(ControllerEvent::Completed(SessionEvent::TrendingLoaded(
                        records,
                    )));
                });
            }
        }
    }
}
