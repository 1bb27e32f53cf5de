//! Artifact domain entity
//!
//! One published version of a library as reported by the search index.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published artifact version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub group: String,
    pub name: String,
    pub version: String,
    /// Publish time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Artifact {
    /// `group:name:version`, used as both id and title of feed items
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }

    /// Public artifact page on search.maven.org
    pub fn page_url(&self) -> String {
        format!(
            "https://search.maven.org/artifact/{}/{}/{}/jar",
            self.group, self.name, self.version
        )
    }

    /// Publish time truncated to whole seconds.
    ///
    /// Timestamps outside chrono's range fall back to the Unix epoch.
    pub fn published_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp / 1000, 0).unwrap_or_default()
    }
}
