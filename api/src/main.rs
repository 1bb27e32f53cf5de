//! Maven feed API server
//!
//! Watches a configured set of Maven coordinates and serves their most recent
//! published versions as RSS, Atom and JSON feeds.
//! Uses hexagonal (ports & adapters) architecture: the search index sits
//! behind the `ArtifactSearch` port.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::MavenSearchClient;
use app::ReleaseFeedService;
use config::Config;
use domain::ports::ArtifactSearch;

/// Application state shared across all handlers
pub struct AppState<S>
where
    S: ArtifactSearch,
{
    pub feed_service: Arc<ReleaseFeedService<S>>,
}

impl<S> Clone for AppState<S>
where
    S: ArtifactSearch,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for a search backend
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ArtifactSearch + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/rss", get(handlers::get_rss::<S>))
        .route("/atom", get(handlers::get_atom::<S>))
        .route("/json", get(handlers::get_json_feed::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing(debug_enabled: bool) {
    let default_filter = if debug_enabled {
        "info,maven_feed_api=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the debug flag picks the filter
    let config = Config::from_env();
    init_tracing(config.as_ref().map(|c| c.debug_enabled).unwrap_or(false));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Maven feed API...");
    tracing::debug!(coordinates = ?config.coordinates, "Parsed artifact specs");

    let search = Arc::new(MavenSearchClient::new(
        config.search_url.clone(),
        config.debug_enabled,
    ));

    let feed_service = Arc::new(ReleaseFeedService::new(
        search,
        config.coordinates.clone(),
        config.max_results,
        config.self_url.clone(),
    ));

    let app = build_router(AppState { feed_service });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
