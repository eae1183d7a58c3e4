//! Demo provider implementation for offline development.

use async_trait::async_trait;

use super::MovieProvider;
use crate::errors::MovieSearchError;
use crate::types::{Movie, MovieQuery};

/// (id, title, rating, poster path, release date, language)
const CATALOGUE: &[(u64, &str, f64, &str, &str, &str)] = &[
    (603, "The Matrix", 8.2, "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg", "1999-03-30", "en"),
    (27205, "Inception", 8.4, "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg", "2010-07-15", "en"),
    (129, "Spirited Away", 8.5, "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg", "2001-07-20", "ja"),
    (496243, "Parasite", 8.5, "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg", "2019-05-30", "ko"),
    (194, "Amélie", 7.9, "/nSxDa3M9aMvGVLoItzWTepQ5h5d.jpg", "2001-04-25", "fr"),
    (598, "City of God", 8.4, "/k7eYdWvhYQyRQoU2TB2A2Xu2TfD.jpg", "2002-02-05", "pt"),
    (157336, "Interstellar", 8.4, "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg", "2014-11-05", "en"),
    (4935, "Howl's Moving Castle", 8.4, "", "2004-11-19", "ja"),
];

/// Demo provider for development and testing.
///
/// Serves a fixed catalogue without external API calls. Popular listings
/// return the whole catalogue; searches match titles case-insensitively.
#[derive(Debug)]
pub struct DemoProvider {
    movies: Vec<Movie>,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProvider {
    /// Creates a demo provider over the built-in catalogue.
    pub fn new() -> Self {
        let movies = CATALOGUE
            .iter()
            .map(
                |&(id, title, rating, poster_path, release_date, language)| Movie {
                    id,
                    title: title.to_string(),
                    vote_average: Some(rating),
                    poster_path: (!poster_path.is_empty()).then(|| poster_path.to_string()),
                    release_date: Some(release_date.to_string()),
                    original_language: language.to_string(),
                },
            )
            .collect();

        Self { movies }
    }

    /// Creates a demo provider over a caller-supplied catalogue.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl MovieProvider for DemoProvider {
    async fn fetch_movies(&self, query: &MovieQuery) -> Result<Vec<Movie>, MovieSearchError> {
        let movies = match query {
            MovieQuery::Popular => self.movies.clone(),
            MovieQuery::Search(text) => {
                let needle = text.trim().to_lowercase();
                self.movies
                    .iter()
                    .filter(|movie| movie.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        };

        Ok(movies)
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
