//! Test fixtures
//!
//! Factory functions for creating test data.

use std::sync::Arc;

use crate::app::ReleaseFeedService;
use crate::domain::entities::{Artifact, Coordinate};
use crate::AppState;

use super::MockArtifactSearch;

/// Create an artifact record
pub fn test_artifact(group: &str, name: &str, version: &str, timestamp: i64) -> Artifact {
    Artifact {
        group: group.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        timestamp,
    }
}

/// Create app state backed by a mock search index
pub fn test_state(
    search: MockArtifactSearch,
    coordinates: Vec<Coordinate>,
) -> AppState<MockArtifactSearch> {
    AppState {
        feed_service: Arc::new(ReleaseFeedService::new(
            Arc::new(search),
            coordinates,
            20,
            "https://feeds.example.com/rss".to_string(),
        )),
    }
}
