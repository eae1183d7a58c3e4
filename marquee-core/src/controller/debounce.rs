//! Cancellable delayed task for debouncing input.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Runs a callback once input has been quiet for `delay`.
///
/// Each [`Debouncer::schedule`] aborts the pending task and starts a new one.
/// The callback receives a ticket; callers compare it with
/// [`Debouncer::is_current`] to drop a callback that already fired while a
/// newer schedule was in flight.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    ticket: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ticket: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restarts the quiet window; returns the ticket passed to `on_elapsed`.
    pub fn schedule<F, Fut>(&mut self, on_elapsed: F) -> u64
    where
        F: FnOnce(u64) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.ticket += 1;

        let ticket = self.ticket;
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed(ticket).await;
        }));

        ticket
    }

    /// Aborts the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True if `ticket` belongs to the latest schedule.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.ticket
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
