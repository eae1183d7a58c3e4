//! Server component wiring for dependency injection.
//!
//! Production talks to TMDB and Appwrite; development runs entirely offline
//! on the demo catalogue and in-memory analytics. The web layer receives a
//! ready [`ServerComponents`] and stays mode-agnostic.

use std::sync::Arc;

use marquee_search::{MovieSearchService, TmdbClient};

use crate::analytics::{AppwriteAnalytics, InMemoryAnalytics, SearchAnalytics};
use crate::config::MarqueeConfig;
use crate::controller::{ControllerHandle, spawn_controller};
use crate::mode::RuntimeMode;

/// Pre-configured runtime services shared by the web server and the CLI.
#[derive(Debug, Clone)]
pub struct ServerComponents {
    pub controller: ControllerHandle,
    pub search: MovieSearchService,
    pub analytics: Arc<dyn SearchAnalytics>,
    pub mode: RuntimeMode,
}

impl ServerComponents {
    /// Builds the collaborators for `mode` and spawns the controller actor.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// - `MarqueeError::Search` - The TMDB client could not be constructed
    /// - `MarqueeError::Analytics` - The Appwrite client could not be constructed
    pub fn build(config: &MarqueeConfig, mode: RuntimeMode) -> crate::Result<Self> {
        let (search, analytics) = Self::collaborators(config, mode)?;
        Ok(Self::with_collaborators(config, mode, search, analytics))
    }

    /// Builds the movie service and analytics backend without a controller.
    ///
    /// Used by one-shot CLI commands that never debounce.
    ///
    /// # Errors
    /// - `MarqueeError::Search` - The TMDB client could not be constructed
    /// - `MarqueeError::Analytics` - The Appwrite client could not be constructed
    pub fn collaborators(
        config: &MarqueeConfig,
        mode: RuntimeMode,
    ) -> crate::Result<(MovieSearchService, Arc<dyn SearchAnalytics>)> {
        let collaborators: (MovieSearchService, Arc<dyn SearchAnalytics>) = match mode {
            RuntimeMode::Production => {
                let client = TmdbClient::new(&config.tmdb.base_url, &config.tmdb.api_key)?;
                let analytics = AppwriteAnalytics::new(&config.appwrite)?;
                (MovieSearchService::with_tmdb(client), Arc::new(analytics))
            }
            RuntimeMode::Development => (
                MovieSearchService::new_demo(),
                Arc::new(InMemoryAnalytics::new()),
            ),
        };
        Ok(collaborators)
    }

    /// Spawns the controller over caller-supplied collaborators.
    pub fn with_collaborators(
        config: &MarqueeConfig,
        mode: RuntimeMode,
        search: MovieSearchService,
        analytics: Arc<dyn SearchAnalytics>,
    ) -> Self {
        let controller = spawn_controller(&config.search, search.clone(), analytics.clone());
        tracing::info!(
            %mode,
            provider = search.provider_name(),
            analytics = analytics.name(),
            "Server components ready"
        );

        Self {
            controller,
            search,
            analytics,
            mode,
        }
    }

    pub fn controller(&self) -> &ControllerHandle {
        &self.controller
    }
}
