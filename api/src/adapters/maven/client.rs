//! Maven Central search client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{Artifact, Coordinate};
use crate::domain::ports::ArtifactSearch;
use crate::error::MavenError;

/// Client for the Solr `select` endpoint of Maven Central search
pub struct MavenSearchClient {
    http: Client,
    search_url: String,
    debug: bool,
}

impl MavenSearchClient {
    pub fn new(search_url: String, debug: bool) -> Self {
        Self {
            http: Client::new(),
            search_url: search_url.trim_end_matches('/').to_string(),
            debug,
        }
    }

    /// Query URL for all versions of `coordinate` in the `gav` core
    fn query_url(&self, coordinate: &Coordinate, rows: usize) -> String {
        format!(
            "{}?q=g:%22{}%22+AND+a:%22{}%22&core=gav&rows={}&wt=json",
            self.search_url,
            encode(&coordinate.group),
            encode(&coordinate.name),
            rows
        )
    }
}

/// Response types from the Solr API
#[derive(Debug, Deserialize)]
struct SolrResponse {
    response: SolrBody,
}

#[derive(Debug, Deserialize)]
struct SolrBody {
    #[serde(default)]
    docs: Vec<GavDoc>,
}

#[derive(Debug, Deserialize)]
struct GavDoc {
    g: String,
    a: String,
    v: String,
    timestamp: i64,
}

impl From<GavDoc> for Artifact {
    fn from(d: GavDoc) -> Self {
        Artifact {
            group: d.g,
            name: d.a,
            version: d.v,
            timestamp: d.timestamp,
        }
    }
}

fn parse_search_response(
    coordinate: &Coordinate,
    body: &[u8],
) -> Result<Vec<Artifact>, MavenError> {
    let response: SolrResponse =
        serde_json::from_slice(body).map_err(|source| MavenError::Deserialization {
            coordinate: coordinate.clone(),
            source,
        })?;

    Ok(response
        .response
        .docs
        .into_iter()
        .map(Artifact::from)
        .collect())
}

#[async_trait]
impl ArtifactSearch for MavenSearchClient {
    async fn search(
        &self,
        coordinate: &Coordinate,
        rows: usize,
    ) -> Result<Vec<Artifact>, MavenError> {
        let url = self.query_url(coordinate, rows);
        if self.debug {
            tracing::debug!(%coordinate, %url, "Fetching artifacts");
        }

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| MavenError::Request {
                coordinate: coordinate.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MavenError::Status {
                coordinate: coordinate.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| MavenError::Body {
            coordinate: coordinate.clone(),
            source,
        })?;

        if self.debug {
            tracing::debug!(
                %coordinate,
                body = %String::from_utf8_lossy(&body),
                "Received body"
            );
        }

        let artifacts = parse_search_response(coordinate, &body)?;
        if artifacts.is_empty() {
            tracing::info!(%coordinate, "No artifacts received");
        } else {
            tracing::debug!(%coordinate, count = artifacts.len(), "Parsed artifacts");
        }

        Ok(artifacts)
    }
}
