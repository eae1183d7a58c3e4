//! Runtime mode configuration for Marquee.

use serde::{Deserialize, Serialize};

/// Runtime mode for Marquee services.
///
/// Controls whether to use the real movie API and document store or the
/// offline demo catalogue with in-memory analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RuntimeMode {
    /// Production mode - uses TMDB and Appwrite
    Production,
    /// Development mode - uses demo movies and in-memory analytics
    #[default]
    Development,
}

impl RuntimeMode {
    /// Check if running in development mode.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if running in production mode.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "PRODUCTION"),
            Self::Development => write!(f, "DEVELOPMENT"),
        }
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(format!(
                "Invalid runtime mode: '{s}'. Valid options are: production, development"
            )),
        }
    }
}
