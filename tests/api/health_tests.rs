//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, required_env, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new().await;

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "alive");
}

/// Probes are reachable on any host, e.g. a pod IP.
#[tokio::test]
async fn test_health_ignores_allowed_hosts() {
    let app = TestApp::new().await;

    let response = app.get_with_host("/health", "10.0.0.12:8000").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "shop.example.com");
    env.set("POSTGRES_HOST", "127.0.0.1");
    env.set("POSTGRES_PORT", "1");
    let app = TestApp::with_env(env).await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["checks"]["database"]["status"], "unhealthy");
}
