//! Movie card components

use marquee_search::Movie;

use super::escape_html;

/// Renders one movie as a poster card.
///
/// Missing fields fall back to the placeholder poster and `N/A`.
pub fn movie_card(movie: &Movie) -> String {
    let title = escape_html(&movie.title);
    let poster = escape_html(&movie.poster_url_or_placeholder());
    let rating = movie.rating_label();
    let language = escape_html(&movie.original_language);
    let year = escape_html(&movie.release_year());

    format!(
        r#"<li class="movie-card bg-slate-900 rounded-2xl p-5 shadow-inner" data-movie-id="{id}">
            <img src="{poster}" alt="{title}" class="rounded-lg h-auto w-full">
            <div class="mt-4">
                <h3 class="font-bold text-base line-clamp-1">{title}</h3>
                <div class="content flex items-center gap-2 text-gray-400 mt-2">
                    <div class="rating flex items-center gap-1">
                        <img src="/static/star.svg" alt="Star" class="w-4 h-4">
                        <p class="font-bold text-white">{rating}</p>
                    </div>
                    <span>●</span>
                    <p class="lang capitalize">{language}</p>
                    <span>●</span>
                    <p class="year">{year}</p>
                </div>
            </div>
        </li>"#,
        id = movie.id
    )
}

/// Renders movies as a responsive card grid.
pub fn movie_grid(movies: &[Movie]) -> String {
    let cards: String = movies.iter().map(movie_card).collect();
    format!(r#"<ul class="grid grid-cols-1 gap-5 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">{cards}</ul>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            vote_average: Some(8.216),
            poster_path: Some("/matrix.jpg".to_string()),
            release_date: Some("1999-03-30".to_string()),
            original_language: "en".to_string(),
        }
    }

    #[test]
    fn test_card_renders_all_fields() {
        let html = movie_card(&movie());

        assert!(html.contains(r#"src="https://image.tmdb.org/t/p/w500/matrix.jpg""#));
        assert!(html.contains(r#"alt="The Matrix""#));
        assert!(html.contains(">8.2<"));
        assert!(html.contains(">en<"));
        assert!(html.contains(">1999<"));
    }

    #[test]
    fn test_card_fallbacks() {
        let movie = Movie {
            vote_average: None,
            poster_path: None,
            release_date: None,
            ..movie()
        };
        let html = movie_card(&movie);

        assert!(html.contains(r#"src="/static/no-movie.png""#));
        assert_eq!(html.matches(">N/A<").count(), 2);
    }

    #[test]
    fn test_grid_renders_one_card_per_movie() {
        let second = Movie {
            id: 604,
            title: "The Matrix Reloaded".to_string(),
            ..movie()
        };
        let html = movie_grid(&[movie(), second]);

        assert_eq!(html.matches("movie-card").count(), 2);
        assert!(html.contains(r#"data-movie-id="604""#));
    }
}
