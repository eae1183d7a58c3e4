//! Full page handlers using the component system

pub mod home;

pub use home::home_page;
