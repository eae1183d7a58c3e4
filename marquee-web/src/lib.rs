//! Marquee Web - HTMX movie search UI and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Server-rendered single page backed by the search controller. The search
//! box posts every keystroke; the results section polls for the current
//! session state.

pub mod components;
pub mod error;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod server;

// Re-export main types
pub use error::WebError;
pub use server::{AppState, router, run_server};
