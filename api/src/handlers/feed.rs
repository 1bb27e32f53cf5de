//! Feed handlers
//!
//! One route per syndication format. Every request runs the whole
//! fetch, sort and render pipeline against the search index.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::ports::ArtifactSearch;
use crate::error::AppError;
use crate::feed::FeedFormat;
use crate::AppState;

async fn produce_feed<S>(state: &AppState<S>, format: FeedFormat) -> Result<Response, AppError>
where
    S: ArtifactSearch,
{
    let body = state.feed_service.produce(format).await?;
    tracing::debug!(%format, bytes = body.len(), "Feed produced");

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}

/// GET /rss
pub async fn get_rss<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: ArtifactSearch,
{
    produce_feed(&state, FeedFormat::Rss).await
}

/// GET /atom
///
/// Atom entries carry the group id as author.
pub async fn get_atom<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: ArtifactSearch,
{
    produce_feed(&state, FeedFormat::Atom).await
}

/// GET /json
pub async fn get_json_feed<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: ArtifactSearch,
{
    produce_feed(&state, FeedFormat::JsonFeed).await
}
