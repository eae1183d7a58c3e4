//! Reusable HTML components for the HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments used both in the full page
//! and as HTMX partial updates. Text from the movie API or the analytics
//! store passes through [`escape_html`] before it is embedded.

pub mod layout;
pub mod movie;
pub mod results;
pub mod search;
pub mod trending;

// Re-export main component functions
pub use layout::{hero_header, render_page};
pub use movie::{movie_card, movie_grid};
pub use results::{results_section, spinner};
pub use search::search_box;
pub use trending::trending_section;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(
            escape_html(r#"<b class="x">'hi'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;&#39;hi&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Amélie"), "Amélie");
    }
}
