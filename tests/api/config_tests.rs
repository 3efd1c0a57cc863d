//! Client configuration endpoint and settings-driven middleware.

use axum::http::StatusCode;

use crate::common::{body_json, required_env, TestApp};

#[tokio::test]
async fn test_client_config_exposes_public_values() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/config").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["site_url"], "https://shop.example.com");
    assert_eq!(json["stripe_public_key"], "pk_test_storefront");
    assert_eq!(json["paypal_client_id"], "paypal-client-id");
    assert_eq!(json["static_url"], "static/");
    assert_eq!(json["media_url"], "media/");
}

#[tokio::test]
async fn test_client_config_never_contains_secrets() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/config").await;
    let body = body_json(response).await.to_string();

    assert!(!body.contains("sk_test_storefront"));
    assert!(!body.contains("paypal-secret-id"));
}

#[tokio::test]
async fn test_disallowed_host_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get_with_host("/api/v1/config", "evil.example.net").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 10002);
}

#[tokio::test]
async fn test_allowed_host_with_port_is_accepted() {
    let app = TestApp::new().await;

    let response = app
        .get_with_host("/api/v1/config", "shop.example.com:8443")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_debug_mode_allows_localhost_when_hosts_empty() {
    let mut env = required_env();
    env.set("DJANGO_DEBUG", "True");
    let app = TestApp::with_env(env).await;

    let response = app.get_with_host("/api/v1/config", "localhost:8000").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get_with_host("/api/v1/config", "shop.example.com").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_allowed_hosts_rejects_everything_outside_debug() {
    let app = TestApp::with_env(required_env()).await;

    let response = app.get_with_host("/api/v1/config", "localhost").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(
        headers["cross-origin-opener-policy"],
        "same-origin-allow-popups"
    );
    assert!(headers.get("strict-transport-security").is_none());
}

#[tokio::test]
async fn test_hsts_header_when_configured() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "shop.example.com");
    env.set("SECURE_HSTS_SECONDS", "31536000");
    env.set("SECURE_HSTS_INCLUDE_SUBDOMAINS", "true");
    let app = TestApp::with_env(env).await;

    let response = app.get("/health").await;

    assert_eq!(
        response.headers()["strict-transport-security"],
        "max-age=31536000; includeSubDomains"
    );
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 10001);
}

#[tokio::test]
async fn test_bucket_overrides_nothing_in_client_config() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "shop.example.com");
    env.set("AWS_STORAGE_BUCKET_NAME", "shop-assets");
    let app = TestApp::with_env(env).await;

    assert_eq!(
        app.settings.storage.custom_domain.as_deref(),
        Some("shop-assets.s3.amazonaws.com")
    );

    let json = body_json(app.get("/api/v1/config").await).await;
    assert_eq!(json["static_url"], "static/");
}
