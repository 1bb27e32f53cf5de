//! Full pipeline tests
//!
//! Drive the router with the real Maven search client against a stubbed
//! Solr endpoint.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt; // for oneshot
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::adapters::MavenSearchClient;
    use crate::app::ReleaseFeedService;
    use crate::domain::entities::Coordinate;
    use crate::error::FEED_ERROR_BODY;
    use crate::{build_router, AppState};

    fn solr_docs(docs: &[(&str, &str, &str, i64)]) -> serde_json::Value {
        let docs: Vec<_> = docs
            .iter()
            .map(|(g, a, v, ts)| {
                json!({
                    "id": format!("{}:{}:{}", g, a, v),
                    "g": g,
                    "a": a,
                    "v": v,
                    "p": "jar",
                    "timestamp": ts,
                })
            })
            .collect();

        json!({
            "responseHeader": {"status": 0},
            "response": {"numFound": docs.len(), "start": 0, "docs": docs},
        })
    }

    async fn mount_docs(server: &MockServer, artifact: &str, docs: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/solrsearch/select"))
            .and(query_param(
                "q",
                format!("g:\"org.example\" AND a:\"{}\"", artifact),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(docs))
            .expect(1)
            .mount(server)
            .await;
    }

    fn router(search_url: String, coordinates: Vec<Coordinate>) -> Router {
        let search = Arc::new(MavenSearchClient::new(search_url, true));
        let feed_service = Arc::new(ReleaseFeedService::new(
            search,
            coordinates,
            20,
            "https://feeds.example.com/json".to_string(),
        ));
        build_router(AppState { feed_service })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn feed_orders_items_across_coordinates_by_timestamp() {
        let server = MockServer::start().await;
        mount_docs(
            &server,
            "alpha",
            solr_docs(&[
                ("org.example", "alpha", "1.0", 100),
                ("org.example", "alpha", "3.0", 300),
            ]),
        )
        .await;
        mount_docs(
            &server,
            "beta",
            solr_docs(&[("org.example", "beta", "2.0", 200)]),
        )
        .await;

        let app = router(
            format!("{}/solrsearch/select", server.uri()),
            vec![
                Coordinate::new("org.example", "alpha"),
                Coordinate::new("org.example", "beta"),
            ],
        );

        let (status, body) = get(app, "/json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let titles: Vec<_> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            titles,
            vec![
                "org.example:alpha:3.0",
                "org.example:beta:2.0",
                "org.example:alpha:1.0",
            ]
        );
    }

    #[tokio::test]
    async fn atom_feed_end_to_end() {
        let server = MockServer::start().await;
        mount_docs(
            &server,
            "alpha",
            solr_docs(&[("org.example", "alpha", "1.0", 1_700_000_000_000)]),
        )
        .await;

        let app = router(
            format!("{}/solrsearch/select", server.uri()),
            vec![Coordinate::new("org.example", "alpha")],
        );

        let request = Request::builder().uri("/atom").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/atom+xml"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let atom = atom_syndication::Feed::read_from(&body[..]).unwrap();
        assert_eq!(atom.entries().len(), 1);
        assert_eq!(atom.entries()[0].authors()[0].name(), "org.example");
    }

    #[tokio::test]
    async fn transport_failure_returns_500_without_partial_feed() {
        // Nothing listens on port 1
        let app = router(
            "http://127.0.0.1:1/solrsearch/select".to_string(),
            vec![Coordinate::new("org.example", "alpha")],
        );

        let (status, body) = get(app, "/rss").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, FEED_ERROR_BODY);
    }

    #[tokio::test]
    async fn failure_on_second_coordinate_discards_first() {
        let server = MockServer::start().await;
        mount_docs(
            &server,
            "alpha",
            solr_docs(&[("org.example", "alpha", "1.0", 100)]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/solrsearch/select"))
            .and(query_param("q", "g:\"org.example\" AND a:\"beta\""))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
            )
            .mount(&server)
            .await;

        let app = router(
            format!("{}/solrsearch/select", server.uri()),
            vec![
                Coordinate::new("org.example", "alpha"),
                Coordinate::new("org.example", "beta"),
            ],
        );

        let (status, body) = get(app, "/atom").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, FEED_ERROR_BODY);
        assert!(!body.contains("org.example"));
    }
}
