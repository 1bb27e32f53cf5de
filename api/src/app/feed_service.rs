//! Release feed service
//!
//! Fetches published versions for every watched coordinate, orders them
//! newest first and shapes them into a feed envelope.
//! Nothing is cached: every call goes back to the search index.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Artifact, Coordinate};
use crate::domain::ports::ArtifactSearch;
use crate::error::{AppError, MavenError};
use crate::feed::FeedFormat;

pub const FEED_TITLE: &str = "Maven Libraries Versions";
pub const FEED_DESCRIPTION: &str = "Lists versions of Maven libraries";

/// A feed of released artifact versions, ready to be serialized
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseFeed {
    pub title: String,
    pub description: String,
    /// Self-referencing URL of the feed
    pub link: String,
    pub updated: DateTime<Utc>,
    pub items: Vec<ReleaseItem>,
}

/// One released version
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseItem {
    /// `group:name:version`
    pub id: String,
    pub title: String,
    /// Artifact page on search.maven.org
    pub link: String,
    pub description: String,
    pub published: DateTime<Utc>,
    /// Group id, only set for formats that carry authors
    pub author: Option<String>,
}

impl ReleaseItem {
    pub fn from_artifact(artifact: &Artifact, include_author: bool) -> Self {
        let gav = artifact.gav();
        Self {
            id: gav.clone(),
            title: gav,
            link: artifact.page_url(),
            description: format!(
                "New artifact version: groupId: {}; artifactId: {}; version: {}",
                artifact.group, artifact.name, artifact.version
            ),
            published: artifact.published_at(),
            author: include_author.then(|| artifact.group.clone()),
        }
    }
}

/// Copy of `artifacts` ordered by descending publish timestamp.
///
/// Relative order of equal timestamps is not guaranteed.
pub fn sort_by_timestamp_desc(artifacts: &[Artifact]) -> Vec<Artifact> {
    let mut sorted = artifacts.to_vec();
    sorted.sort_unstable_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// One feed item per artifact, in input order
pub fn feed_items(artifacts: &[Artifact], include_author: bool) -> Vec<ReleaseItem> {
    artifacts
        .iter()
        .map(|a| ReleaseItem::from_artifact(a, include_author))
        .collect()
}

/// Service producing release feeds for a fixed set of coordinates
pub struct ReleaseFeedService<S>
where
    S: ArtifactSearch,
{
    search: Arc<S>,
    coordinates: Vec<Coordinate>,
    max_results: usize,
    self_url: String,
}

impl<S> ReleaseFeedService<S>
where
    S: ArtifactSearch,
{
    pub fn new(
        search: Arc<S>,
        coordinates: Vec<Coordinate>,
        max_results: usize,
        self_url: String,
    ) -> Self {
        Self {
            search,
            coordinates,
            max_results,
            self_url,
        }
    }

    /// Fetch every coordinate in configuration order.
    ///
    /// Fails on the first upstream error; no partial results are returned.
    pub async fn collect_artifacts(&self) -> Result<Vec<Artifact>, MavenError> {
        let mut artifacts = Vec::new();
        for coordinate in &self.coordinates {
            let found = self.search.search(coordinate, self.max_results).await?;
            artifacts.extend(found);
        }
        Ok(artifacts)
    }

    /// Wrap already sorted artifacts in the feed envelope
    pub fn build_feed(&self, artifacts: &[Artifact], include_author: bool) -> ReleaseFeed {
        ReleaseFeed {
            title: FEED_TITLE.to_string(),
            description: FEED_DESCRIPTION.to_string(),
            link: self.self_url.clone(),
            updated: Utc::now(),
            items: feed_items(artifacts, include_author),
        }
    }

    /// Run fetch, sort, map and render for one request
    pub async fn produce(&self, format: FeedFormat) -> Result<String, AppError> {
        let artifacts = self.collect_artifacts().await?;
        let sorted = sort_by_timestamp_desc(&artifacts);
        tracing::debug!(count = sorted.len(), ?format, "Rendering feed");

        let feed = self.build_feed(&sorted, format.includes_author());
        Ok(format.render(&feed)?)
    }
}
