//! Xtarz Web Server
//!
//! Axum-based HTTP surface for the content analyzer: JSON analysis and health
//! endpoints plus the embedded landing page.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use xtarz_core::ServerConfig;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/health", get(routes::health::health));

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/static/script.js", get(routes::dashboard::script))
        .merge(api_routes.clone())
        // Path used by the bundled frontend
        .nest("/api", api_routes)
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(routes::internal_error))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(config.analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use xtarz_core::AnalyzerConfig;

    fn app() -> Router {
        create_router(AppState::new(AnalyzerConfig::immediate()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send_json(request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(request).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn post_analyze(path: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_technology_topic() {
        let (status, body) =
            send_json(post_analyze("/analyze", r#"{"topic":"blockchain strategy"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!("Deep analysis completed successfully!"));
        assert!(body.get("error").is_none());

        let html = body["result"].as_str().unwrap();
        assert!(html.contains("Deep Analysis Report: blockchain strategy"));
        assert!(html.contains(r#"data-category="technology""#));
        assert!(html.contains("Key Technologies & Tools"));
        assert!(html.contains("Edge Computing Integration"));
    }

    #[tokio::test]
    async fn test_analyze_api_prefix() {
        let (status, body) =
            send_json(post_analyze("/api/analyze", r#"{"topic":"Startup funding"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["result"]
            .as_str()
            .unwrap()
            .contains(r#"data-category="business""#));
    }

    #[tokio::test]
    async fn test_analyze_empty_topic() {
        let (status, body) = send_json(post_analyze("/analyze", r#"{"topic":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "Topic is required" }));
    }

    #[tokio::test]
    async fn test_analyze_blank_or_missing_topic() {
        for payload in [r#"{"topic":"   "}"#, r#"{}"#, r#"{"topic":null}"#] {
            let (status, body) = send_json(post_analyze("/analyze", payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
            assert_eq!(body["error"], json!("Topic is required"));
        }
    }

    #[tokio::test]
    async fn test_analyze_without_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/analyze")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send_json(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Topic is required"));
    }

    #[tokio::test]
    async fn test_analyze_malformed_json() {
        for payload in ["{not json", r#"{"topic": 42}"#] {
            let (status, body) = send_json(post_analyze("/analyze", payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], json!("Topic is required"));
        }
    }

    #[tokio::test]
    async fn test_health() {
        for path in ["/health", "/api/health"] {
            let (status, body) = send_json(get(path)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], json!("healthy"));
            assert!(body["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = send_json(get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Endpoint not found" }));
    }

    #[tokio::test]
    async fn test_landing_page_and_script() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("XtarzLab Content Analyzer"));

        let response = app().oneshot(get("/static/script.js")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/javascript"));
    }

    #[tokio::test]
    async fn test_panic_maps_to_internal_error() {
        async fn explode() -> &'static str {
            panic!("boom")
        }

        let router: Router = Router::new()
            .route("/boom", axum::routing::get(explode))
            .layer(CatchPanicLayer::custom(routes::internal_error));

        let response = router.oneshot(get("/boom")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
