//! Actor implementation for the search controller.

use std::sync::Arc;

use marquee_search::MovieSearchService;
use tokio::sync::mpsc;

use super::commands::{ControllerCommand, ControllerEvent};
use super::core::SearchController;
use super::handle::ControllerHandle;
use super::state::SessionEvent;
use crate::analytics::SearchAnalytics;
use crate::config::SearchConfig;

/// Spawns the search controller actor and returns its handle.
///
/// The actor starts by fetching popular movies and the trending list, then
/// processes commands and task completions one at a time.
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() {
/// use std::sync::Arc;
///
/// use marquee_core::analytics::InMemoryAnalytics;
/// use marquee_core::config::SearchConfig;
/// use marquee_core::controller::spawn_controller;
/// use marquee_search::MovieSearchService;
///
/// let handle = spawn_controller(
///     &SearchConfig::default(),
///     MovieSearchService::new_demo(),
///     Arc::new(InMemoryAnalytics::new()),
/// );
/// handle.set_search_term("matrix").await.unwrap();
/// # }
/// ```
pub fn spawn_controller(
    config: &SearchConfig,
    search: MovieSearchService,
    analytics: Arc<dyn SearchAnalytics>,
) -> ControllerHandle {
    let (sender, receiver) = mpsc::channel(100);
    let (event_sender, event_receiver) = mpsc::unbounded_channel();
    let controller = SearchController::new(
        config.debounce,
        config.trending_limit,
        search,
        analytics,
        event_sender,
    );

    tokio::spawn(async move {
        run_actor_loop(controller, receiver, event_receiver).await;
    });

    ControllerHandle::new(sender)
}

/// Runs the main actor message processing loop.
///
/// Ends when every handle is dropped or a shutdown command arrives.
async fn run_actor_loop(
    mut controller: SearchController,
    mut receiver: mpsc::Receiver<ControllerCommand>,
    mut events: mpsc::UnboundedReceiver<ControllerEvent>,
) {
    tracing::debug!("Search controller actor started");
    controller.dispatch(SessionEvent::Started);

    loop {
        tokio::select! {
            command = receiver.recv() => match command {
                Some(command) => {
                    if !handle_command(&mut controller, command) {
                        break;
                    }
                }
                None => break,
            },
            Some(event) = events.recv() => controller.handle_event(event),
        }
    }

    controller.cancel_pending();
    tracing::debug!("Search controller actor stopped");
}

/// Handles a single command for the controller.
/// Returns true to continue processing, false to shutdown.
fn handle_command(controller: &mut SearchController, command: ControllerCommand) -> bool {
    match command {
        ControllerCommand::SetSearchTerm { text } => {
            controller.dispatch(SessionEvent::InputChanged(text));
        }

        ControllerCommand::Snapshot { responder } => {
            let _ = responder.send(controller.session().clone());
        }

        ControllerCommand::Shutdown { responder } => {
            controller.cancel_pending();
            let _ = responder.send(());
            return false;
        }
    }

    true
}
