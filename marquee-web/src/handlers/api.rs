//! JSON snapshots of the search session and trending list

use axum::extract::State;
use axum::response::Json;
use marquee_core::{SearchSession, TrendingRecord};

use crate::error::WebError;
use crate::server::AppState;

/// Current search session as JSON.
///
/// # Errors
/// - `WebError::ControllerUnavailable` - The search controller has stopped
pub async fn api_state(State(state): State<AppState>) -> Result<Json<SearchSession>, WebError> {
    Ok(Json(state.controller.snapshot().await?))
}

/// Fresh trending list read from the analytics backend.
///
/// Backend failures yield an empty list.
pub async fn api_trending(State(state): State<AppState>) -> Json<Vec<TrendingRecord>> {
    Json(state.analytics.trending(state.trending_limit).await)
}
