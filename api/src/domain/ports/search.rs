//! Artifact search port trait
//!
//! Defines the interface for querying a package index for published versions.

use async_trait::async_trait;

use crate::domain::entities::{Artifact, Coordinate};
use crate::error::MavenError;

/// Search index that lists published versions of a coordinate
#[async_trait]
pub trait ArtifactSearch: Send + Sync {
    /// Fetch at most `rows` published versions of `coordinate`.
    ///
    /// An empty list is a valid answer, not an error.
    async fn search(
        &self,
        coordinate: &Coordinate,
        rows: usize,
    ) -> Result<Vec<Artifact>, MavenError>;
}
