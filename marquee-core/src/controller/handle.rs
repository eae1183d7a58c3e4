//! Handle for communicating with the search controller actor.

use tokio::sync::{mpsc, oneshot};

use super::commands::ControllerCommand;
use super::state::SearchSession;

/// Errors returned by the controller handle.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ControllerError {
    #[error("Search controller has shut down")]
    Shutdown,
}

/// Handle for communicating with the search controller actor.
///
/// Cheap to clone; every clone talks to the same session.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    sender: mpsc::Sender<ControllerCommand>,
}

impl ControllerHandle {
    /// Creates a new handle with the given command sender.
    pub fn new(sender: mpsc::Sender<ControllerCommand>) -> Self {
        Self { sender }
    }

    /// Replaces the search box text and restarts the debounce window.
    ///
    /// The raw text is visible in the next snapshot immediately; a fetch
    /// follows only after the input stays unchanged for the debounce delay.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - The actor is no longer running
    pub async fn set_search_term(&self, text: impl Into<String>) -> Result<(), ControllerError> {
        self.sender
            .send(ControllerCommand::SetSearchTerm { text: text.into() })
            .await
            .map_err(|_| ControllerError::Shutdown)
    }

    /// Returns a copy of the current session state.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - The actor is no longer running
    pub async fn snapshot(&self) -> Result<SearchSession, ControllerError> {
        let (responder, rx) = oneshot::channel();
        self.sender
            .send(ControllerCommand::Snapshot { responder })
            .await
            .map_err(|_| ControllerError::Shutdown)?;

        rx.await.map_err(|_| ControllerError::Shutdown)
    }

    /// Stops the actor and waits for it to acknowledge.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - The actor had already stopped
    pub async fn shutdown(&self) -> Result<(), ControllerError> {
        let (responder, rx) = oneshot::channel();
        self.sender
            .send(ControllerCommand::Shutdown { responder })
            .await
            .map_err(|_| ControllerError::Shutdown)?;

        rx.await.map_err(|_| ControllerError::Shutdown)
    }
}
