//! Unified error types for the feed API
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Startup configuration errors (fatal)
//! - `MavenError`: Maven Central search client errors
//! - `FeedError`: Feed serialization errors
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::entities::Coordinate;

/// Body sent to clients for every pipeline failure
pub const FEED_ERROR_BODY: &str = "Internal error occurred producing feed";

/// Configuration errors - the process refuses to start
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} not set or empty")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("Invalid artifact specification '{0}': expected group:name")]
    InvalidCoordinate(String),
}

/// Maven Central search errors
#[derive(Debug, Error)]
pub enum MavenError {
    #[error("Error fetching data for {coordinate}: {source}")]
    Request {
        coordinate: Coordinate,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status for {coordinate}: {status}")]
    Status { coordinate: Coordinate, status: u16 },

    #[error("Error reading body for {coordinate}: {source}")]
    Body {
        coordinate: Coordinate,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error decoding data for {coordinate}: {source}")]
    Deserialization {
        coordinate: Coordinate,
        #[source]
        source: serde_json::Error,
    },
}

/// Feed serialization errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("RSS serialization failed: {0}")]
    Rss(#[from] rss::Error),

    #[error("Atom serialization failed: {0}")]
    Atom(#[from] atom_syndication::Error),

    #[error("JSON Feed serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Maven error: {0}")]
    Maven(#[from] MavenError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The cause stays in the server log; clients only get the fixed body.
        match &self {
            AppError::Maven(e) => tracing::error!(error = %e, "Error fetching artifacts"),
            AppError::Feed(e) => tracing::error!(error = %e, "Error converting feed"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            FEED_ERROR_BODY,
        )
            .into_response()
    }
}
