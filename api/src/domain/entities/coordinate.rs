//! Coordinate domain entity
//!
//! A (group, artifact name) pair identifying one library to watch.

use serde::{Deserialize, Serialize};

/// Maven coordinate without a version, e.g. `org.slf4j:slf4j-api`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}
