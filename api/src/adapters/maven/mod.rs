//! Maven Central adapter
//!
//! Implementation of the artifact search port against search.maven.org.

pub mod client;

pub use client::MavenSearchClient;
