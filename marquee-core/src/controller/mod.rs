//! Search controller actor
//!
//! Owns the search session (input text, debounced text, results, loading
//! flag, error message, trending list) and orchestrates the movie provider
//! and the analytics backend. Web handlers and the CLI talk to it through a
//! [`ControllerHandle`].

pub mod actor;
pub mod commands;
pub mod core;
pub mod debounce;
pub mod handle;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_mocks;

pub use actor::spawn_controller;
pub use commands::{ControllerCommand, ControllerEvent};
pub use self::core::SearchController;
pub use debounce::Debouncer;
pub use handle::{ControllerError, ControllerHandle};
pub use state::{Effect, ResultsView, SearchSession, SessionEvent};
#[cfg(any(test, feature = "test-utils"))]
pub use test_mocks::{MockMovieProvider, RecordingAnalytics, sample_movie, sample_trending};
