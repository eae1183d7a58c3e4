//! Error types for movie search functionality.

use thiserror::Error;

/// Message shown when a fetch fails and the API gave no better explanation.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch movies. Please try again later.";

/// Message shown when a fetch succeeds but matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No movies found.";

/// Errors that can occur during movie search operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MovieSearchError {
    /// Network communication failed before a response arrived.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// The API answered with a non-success status code.
    #[error("Unexpected HTTP status {status}")]
    HttpStatus {
        /// The status code returned by the API
        status: u16,
    },

    /// Failed to decode the response body.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// The response body carried an explicit failure flag.
    #[error("API error: {message}")]
    ApiError {
        /// Message supplied by the API, or the generic fallback
        message: String,
    },

    /// The request succeeded but returned no movies.
    #[error("No movies found")]
    NoResults,

    /// The provider could not be constructed or is misconfigured.
    #[error("Provider error: {reason}")]
    ProviderError {
        /// The reason for the provider error
        reason: String,
    },
}

impl MovieSearchError {
    /// Returns the message to display in place of the result grid.
    ///
    /// API-supplied messages pass through verbatim; transport and decode
    /// failures collapse into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            MovieSearchError::ApiError { message } => message.clone(),
            MovieSearchError::NoResults => NO_RESULTS_MESSAGE.to_string(),
            MovieSearchError::NetworkError { .. }
            | MovieSearchError::HttpStatus { .. }
            | MovieSearchError::ParseError { .. }
            | MovieSearchError::ProviderError { .. } => GENERIC_FETCH_FAILURE.to_string(),
        }
    }

    /// Checks whether the failure happened below the response body.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            MovieSearchError::NetworkError { .. }
                | MovieSearchError::HttpStatus { .. }
                | MovieSearchError::ParseError { .. }
        )
    }
}
