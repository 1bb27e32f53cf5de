//! Mock implementations of port traits
//!
//! In-memory search index that can be configured per coordinate and
//! records every query it receives.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::domain::entities::{Artifact, Coordinate};
use crate::domain::ports::ArtifactSearch;
use crate::error::MavenError;

#[derive(Default)]
pub struct MockArtifactSearch {
    artifacts: HashMap<Coordinate, Vec<Artifact>>,
    failing: HashSet<Coordinate>,
    calls: RwLock<Vec<(Coordinate, usize)>>,
}

impl MockArtifactSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries for `coordinate` with `artifacts`
    pub fn with_artifacts(mut self, coordinate: Coordinate, artifacts: Vec<Artifact>) -> Self {
        self.artifacts.insert(coordinate, artifacts);
        self
    }

    /// Fail queries for `coordinate` with an upstream error
    pub fn failing_for(mut self, coordinate: Coordinate) -> Self {
        self.failing.insert(coordinate);
        self
    }

    /// Queries received so far, in order
    pub fn calls(&self) -> Vec<(Coordinate, usize)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactSearch for MockArtifactSearch {
    async fn search(
        &self,
        coordinate: &Coordinate,
        rows: usize,
    ) -> Result<Vec<Artifact>, MavenError> {
        self.calls.write().unwrap().push((coordinate.clone(), rows));

        if self.failing.contains(coordinate) {
            return Err(MavenError::Status {
                coordinate: coordinate.clone(),
                status: 500,
            });
        }

        Ok(self
            .artifacts
            .get(coordinate)
            .map(|found| found.iter().take(rows).cloned().collect())
            .unwrap_or_default())
    }
}
