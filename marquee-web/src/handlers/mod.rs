//! JSON API handlers

pub mod api;

pub use api::{api_state, api_trending};
