//! Marquee Search - Movie search and discovery

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides movie lookups against the TMDB API (popular listings and free-text
//! search) plus an offline demo catalogue with the same interface.

pub mod errors;
pub mod providers;
pub mod service;
pub mod tmdb;
pub mod types;

// Re-export main types
pub use errors::MovieSearchError;
pub use providers::{DemoProvider, MovieProvider};
pub use service::MovieSearchService;
pub use tmdb::{TmdbClient, TmdbResponse};
pub use types::{Movie, MovieQuery, NO_POSTER_PLACEHOLDER, poster_url_for};

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
