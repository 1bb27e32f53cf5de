//! Application layer
//!
//! Services orchestrating the fetch, sort and render pipeline.

pub mod feed_service;

pub use feed_service::{ReleaseFeed, ReleaseFeedService, ReleaseItem};
