//! Web layer errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::ControllerError;

/// Errors surfaced by the web server and its handlers.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The search controller actor is no longer running.
    #[error("Search controller unavailable: {0}")]
    ControllerUnavailable(#[from] ControllerError),

    /// The listener could not be bound or the server loop failed.
    #[error("Server failed to start on {address}: {reason}")]
    ServerStartFailed {
        /// Address the server tried to bind
        address: String,
        /// Underlying I/O failure
        reason: String,
    },
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let status = match self {
            WebError::ControllerUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            WebError::ServerStartFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
