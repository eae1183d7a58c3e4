//! Search box component

use super::escape_html;

/// Renders the search input.
///
/// Every edit is posted to `/htmx/search/input`; the server owns debouncing,
/// so the box itself keeps no state beyond its current text.
pub fn search_box(current: &str) -> String {
    let value = escape_html(current);

    format!(
        r#"<div class="search mt-8 max-w-2xl mx-auto">
            <div class="flex items-center gap-3 bg-slate-800 rounded-lg px-4 py-3">
                <img src="/static/search.svg" alt="Search" class="w-5 h-5">
                <input type="text" name="query" value="{value}"
                       placeholder="Search through thousands of movies"
                       autocomplete="off"
                       class="w-full bg-transparent text-white placeholder-gray-400 focus:outline-none"
                       hx-post="/htmx/search/input"
                       hx-trigger="input"
                       hx-swap="none" />
            </div>
        </div>"#
    )
}
