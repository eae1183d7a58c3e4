//! Marquee Core - search controller, analytics and configuration
//!
//! This crate owns everything between the movie provider and the rendered
//! page: the debounced search session actor, the trending-search analytics
//! backends, runtime configuration and logging setup.

pub mod analytics;
pub mod config;
pub mod controller;
pub mod mode;
pub mod server_components;
pub mod tracing_setup;

use marquee_search::MovieSearchError;

// Re-export main types for convenient access
pub use analytics::{AnalyticsError, SearchAnalytics, TrendingRecord};
pub use config::{ConfigError, MarqueeConfig};
pub use controller::{ControllerError, ControllerHandle, SearchSession, spawn_controller};
pub use mode::RuntimeMode;
pub use server_components::ServerComponents;

/// Core errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Movie search error: {0}")]
    Search(#[from] MovieSearchError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Config(ConfigError::MissingVariable { name }) => {
                format!("Missing configuration: set {name}")
            }
            MarqueeError::Config(ConfigError::InvalidValue { name, .. }) => {
                format!("Invalid configuration value for {name}")
            }
            MarqueeError::Search(e) => e.user_message(),
            MarqueeError::Analytics(_) => "Search statistics are unavailable".to_string(),
            MarqueeError::Controller(_) => "Search service is not running".to_string(),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user-supplied configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MarqueeError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
