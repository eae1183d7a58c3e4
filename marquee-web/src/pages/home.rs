//! Home page - search box, trending strip and results

use axum::extract::State;
use axum::response::Html;
use marquee_core::{SearchSession, TrendingRecord};

use crate::components::{hero_header, render_page, results_section, search_box, trending_section};
use crate::error::WebError;
use crate::server::AppState;

/// Renders the search page from the current session. Trending searches are
/// read from the analytics backend on every visit.
///
/// # Errors
/// - `WebError::ControllerUnavailable` - The search controller has stopped
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let session = state.controller.snapshot().await?;
    let trending = state.analytics.trending(state.trending_limit).await;
    Ok(render_page("Marquee", &page_content(&session, &trending)))
}

fn page_content(session: &SearchSession, trending: &[TrendingRecord]) -> String {
    format!(
        r#"{header}

        <div id="trending-slot">
            {trending}
        </div>

        <section id="results" class="all-movies mt-12 space-y-9"
                 hx-get="/htmx/movies" hx-trigger="every 1s" hx-swap="innerHTML">
            {results}
        </section>"#,
        header = hero_header(&search_box(&session.search_term)),
        trending = trending_section(trending),
        results = results_section(session),
    )
}
