//! HTMX + Tailwind web server for Marquee
//!
//! Serves the single search page, its HTMX fragments and a small JSON API.
//! All session state lives in the controller actor; handlers only forward
//! input and render snapshots.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::config::MarqueeConfig;
use marquee_core::{ControllerHandle, SearchAnalytics, ServerComponents};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::error::WebError;
use crate::handlers::{api_state, api_trending};
use crate::htmx::{movies_fragment, search_input, trending_fragment};
use crate::pages::home_page;

/// Shared state handed to every handler.
///
/// Every visitor drives the same controller session, so input typed in one
/// tab replaces the search term and results shown in every other tab.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the shared search session
    pub controller: ControllerHandle,
    /// Analytics backend read for the trending strip and JSON endpoint
    pub analytics: Arc<dyn SearchAnalytics>,
    /// Number of trending records to report
    pub trending_limit: usize,
}

impl AppState {
    /// Builds handler state from runtime components.
    pub fn new(components: &ServerComponents, config: &MarqueeConfig) -> Self {
        Self {
            controller: components.controller.clone(),
            analytics: components.analytics.clone(),
            trending_limit: config.search.trending_limit,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Main page
        .route("/", get(home_page))
        // HTMX partial update endpoints
        .route("/htmx/search/input", post(search_input))
        .route("/htmx/movies", get(movies_fragment))
        .route("/htmx/trending", get(trending_fragment))
        // JSON API endpoints
        .route("/api/state", get(api_state))
        .route("/api/trending", get(api_trending))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until the process exits.
///
/// # Errors
/// - `WebError::ServerStartFailed` - The address could not be bound or serving failed
pub async fn run_server(
    config: MarqueeConfig,
    components: ServerComponents,
) -> Result<(), WebError> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(&components, &config);
    let app = router(state, &config.server.static_dir);

    let start_failed = |e: std::io::Error| WebError::ServerStartFailed {
        address: address.clone(),
        reason: e.to_string(),
    };

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(start_failed)?;
    tracing::info!(
        mode = %components.mode,
        static_dir = %config.server.static_dir,
        "Marquee running on http://{address}"
    );

    axum::serve(listener, app).await.map_err(start_failed)?;
    Ok(())
}
