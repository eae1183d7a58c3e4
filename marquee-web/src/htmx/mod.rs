//! HTMX partial update handlers
//!
//! Provides server-rendered HTML fragments for the polling results section
//! and the trending strip, plus the keystroke sink for the search box.

pub mod search;

pub use search::{SearchInput, movies_fragment, search_input, trending_fragment};
