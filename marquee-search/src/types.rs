//! Data types for movie search functionality.

use serde::{Deserialize, Serialize};

/// Base URL for TMDB poster images at card resolution.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image shown for movies without a poster.
pub const NO_POSTER_PLACEHOLDER: &str = "/static/no-movie.png";

/// A movie record as returned by the movie API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// TMDB identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Average user rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Poster path relative to the image CDN
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO release date (`YYYY-MM-DD`)
    #[serde(default)]
    pub release_date: Option<String>,
    /// ISO 639-1 language code
    #[serde(default)]
    pub original_language: String,
}

impl Movie {
    /// Full poster URL, if the movie has a poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_deref().and_then(poster_url_for)
    }

    /// Full poster URL, or the placeholder image.
    pub fn poster_url_or_placeholder(&self) -> String {
        self.poster_url()
            .unwrap_or_else(|| NO_POSTER_PLACEHOLDER.to_string())
    }

    /// Rating with one decimal place, or `N/A` when unrated.
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) if rating > 0.0 => format!("{rating:.1}"),
            _ => "N/A".to_string(),
        }
    }

    /// Release year taken from the date prefix, or `N/A` when unknown.
    pub fn release_year(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Builds a full poster URL from a TMDB poster path.
///
/// Returns `None` for empty paths.
pub fn poster_url_for(poster_path: &str) -> Option<String> {
    let path = poster_path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(format!("{POSTER_BASE_URL}/{path}"))
}

/// Which listing a fetch should hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovieQuery {
    /// Popular movies, used when the search box is empty
    Popular,
    /// Free-text title search
    Search(String),
}

impl MovieQuery {
    /// Chooses the listing for a debounced search term.
    ///
    /// Only the empty string maps to [`MovieQuery::Popular`]; any other text,
    /// whitespace included, is searched verbatim.
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            Self::Popular
        } else {
            Self::Search(term.to_string())
        }
    }

    /// Path and query string relative to the API base URL.
    pub fn endpoint(&self) -> String {
        match self {
            Self::Popular => "/discover/movie?sort_by=popularity.desc".to_string(),
            Self::Search(query) => format!("/search/movie?query={}", urlencoding::encode(query)),
        }
    }

    /// The search text, if this is a search.
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Popular => None,
            Self::Search(query) => Some(query),
        }
    }
}

impl std::fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::Search(query) => write!(f, "search '{query}'"),
        }
    }
}
