//! Messages understood by the search controller actor.

use tokio::sync::oneshot;

use super::state::{SearchSession, SessionEvent};

/// Commands sent through a [`super::ControllerHandle`].
pub enum ControllerCommand {
    /// Replace the search box text.
    SetSearchTerm { text: String },
    /// Get a copy of the current session for rendering.
    Snapshot {
        responder: oneshot::Sender<SearchSession>,
    },
    /// Stop the actor, aborting any pending debounce.
    Shutdown { responder: oneshot::Sender<()> },
}

/// Completions posted back by tasks the actor spawned.
#[derive(Debug)]
pub enum ControllerEvent {
    /// A debounce window closed; stale tickets are ignored.
    DebounceElapsed { ticket: u64, text: String },
    /// A background fetch or trending load finished.
    Completed(SessionEvent),
}
