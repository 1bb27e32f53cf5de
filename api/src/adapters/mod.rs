//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod maven;

pub use maven::MavenSearchClient;
