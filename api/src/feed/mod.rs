//! Feed module
//!
//! Syndication rendering of release feeds.

pub mod renderer;

pub use renderer::FeedFormat;
