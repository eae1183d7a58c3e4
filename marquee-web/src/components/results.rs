//! Results section: spinner, error or movie grid

use marquee_core::controller::{ResultsView, SearchSession};

use super::{escape_html, movie_grid};

/// Loading indicator shown while a fetch is outstanding.
pub fn spinner() -> String {
    r#"<div role="status" class="flex justify-center py-12">
            <div class="w-10 h-10 border-4 border-slate-600 border-t-indigo-400 rounded-full animate-spin"></div>
            <span class="sr-only">Loading...</span>
        </div>"#
        .to_string()
}

/// Renders the inner content of the results section.
///
/// Exactly one of spinner, error message or grid is shown, in that priority.
pub fn results_section(session: &SearchSession) -> String {
    let body = match session.results_view() {
        ResultsView::Loading => spinner(),
        ResultsView::Error(message) => {
            format!(r#"<p class="text-red-500">{}</p>"#, escape_html(message))
        }
        ResultsView::Movies(movies) => movie_grid(movies),
    };

    format!(r#"<h2 class="text-2xl font-bold mb-6">All Movies</h2>{body}"#)
}
