use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers::{
    AppState,
    pages::index,
    results::{get_results, health},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/api/results", get(get_results))
        .route("/health", get(health))
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::USER_AGENT},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::domain::RawSplitRecord;
    use crate::errors::ServiceError;
    use crate::fetchers::RecordSource;

    struct StubSource {
        json: Option<&'static str>,
    }

    #[async_trait]
    impl RecordSource for StubSource {
        async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
            match self.json {
                Some(json) => Ok(serde_json::from_str(json).unwrap()),
                None => Err(ServiceError::MissingInput("stub has no data".to_string())),
            }
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl RecordSource for BrokenSource {
        async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
            Err(ServiceError::upstream("http://upstream.test", "HTTP error: 502"))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    const RECORDS: &str = r#"[
        {"Name": "Ada", "RaceId": "1", "WaveName": "Heat 1",
         "Start": "09:00:00", "StartDec": "0", "Split1": "09:01:40", "Split1Dec": "0",
         "Finish": "09:03:20", "FinishDec": "0", "Result": "3:20.0", "ResultSecs": 200},
        {"Name": "Grace", "RaceId": "2", "WaveName": "Heat 1",
         "Start": "09:00:00", "StartDec": "0", "Split1": "09:01:45", "Split1Dec": "0",
         "Finish": "00:00:00", "FinishDec": "0", "Result": "In Progress", "ResultSecs": 0}
    ]"#;

    fn router_with(source: Box<dyn RecordSource>, static_dir: &str) -> Router {
        let mut config = AppConfig::default();
        config.server.static_dir = static_dir.to_string();
        create_router(Arc::new(AppState::new(config, source)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_results_returns_both_views() {
        let app = router_with(Box::new(StubSource { json: Some(RECORDS) }), "static");

        let response = app.oneshot(get("/api/results")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["timing"].as_array().unwrap().len(), 2);
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["header"], "Heat 1");
        assert_eq!(results[1]["ResultRank"], "(1)");
        assert_eq!(results[2]["Result"], "In Progress");
    }

    #[tokio::test]
    async fn test_missing_records_is_not_found() {
        let app = router_with(Box::new(StubSource { json: None }), "static");

        let response = app.oneshot(get("/api/results")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_server_error() {
        let app = router_with(Box::new(BrokenSource), "static");

        let response = app.oneshot(get("/api/results")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_health() {
        let app = router_with(Box::new(StubSource { json: None }), "static");

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["lastFetch"].is_null());
    }

    #[tokio::test]
    async fn test_index_follows_user_agent() {
        let dir = std::env::temp_dir().join("split_leaderboard_static_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "desktop").unwrap();
        std::fs::write(dir.join("mobile.html"), "mobile").unwrap();
        let static_dir = dir.to_string_lossy().to_string();

        let app = router_with(Box::new(StubSource { json: None }), &static_dir);
        let request = Request::builder()
            .uri("/")
            .header(USER_AGENT, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"mobile");

        let response = app.oneshot(get("/")).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"desktop");
    }

    #[tokio::test]
    async fn test_index_without_static_files_is_not_found() {
        let app = router_with(Box::new(StubSource { json: None }), "no/such/static/dir");

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
