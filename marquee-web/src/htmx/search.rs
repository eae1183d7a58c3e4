//! Search input and result fragment handlers

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use crate::components::{results_section, trending_section};
use crate::error::WebError;
use crate::server::AppState;

/// Form body posted by the search box.
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    /// Current text of the search box
    #[serde(default)]
    pub query: String,
}

/// Forwards the raw search text to the controller.
///
/// # Errors
/// - `WebError::ControllerUnavailable` - The search controller has stopped
pub async fn search_input(
    State(state): State<AppState>,
    Form(input): Form<SearchInput>,
) -> Result<StatusCode, WebError> {
    tracing::trace!(query = %input.query, "Search input");
    state.controller.set_search_term(input.query).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current results section content.
///
/// # Errors
/// - `WebError::ControllerUnavailable` - The search controller has stopped
pub async fn movies_fragment(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let session = state.controller.snapshot().await?;
    Ok(Html(results_section(&session)))
}

/// Trending strip content read fresh from the analytics backend; empty when
/// there is nothing to show or the backend fails.
pub async fn trending_fragment(State(state): State<AppState>) -> Html<String> {
    Html(trending_section(&state.analytics.trending(state.trending_limit).await))
}
