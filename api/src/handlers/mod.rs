//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feed;

pub use feed::{get_atom, get_json_feed, get_rss};
