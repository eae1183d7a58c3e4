//! Trending searches strip

use marquee_core::TrendingRecord;

use super::escape_html;

/// Renders the ranked trending list, or nothing when it is empty.
///
/// Trending failures never reach the page; an empty list simply hides the
/// section.
pub fn trending_section(records: &[TrendingRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let items: String = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                r#"<li class="flex items-center min-w-[230px]" data-record-id="{id}">
                    <p class="fancy-text text-7xl font-bold">{rank}</p>
                    <img src="{poster}" alt="{title}" class="w-[127px] h-[163px] rounded-lg object-cover -ml-3.5">
                </li>"#,
                id = escape_html(&record.id),
                rank = index + 1,
                poster = escape_html(&record.poster_url),
                title = escape_html(&record.title),
            )
        })
        .collect();

    format!(
        r#"<section class="trending mt-12">
            <h2 class="text-2xl font-bold">Trending Movies</h2>
            <ul class="flex flex-row overflow-x-auto gap-5 mt-6 w-full">{items}</ul>
        </section>"#
    )
}
