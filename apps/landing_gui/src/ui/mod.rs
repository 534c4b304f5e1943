//! UI layer for the landing page: app shell, page copy, and theme.

pub mod app;
mod content;
mod theme;

pub use app::LandingApp;
