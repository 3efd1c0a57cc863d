//! Admin theme endpoints.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_admin_theme_returns_branding() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/admin/theme").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["site_title"], "STANDGATES");
    assert_eq!(json["changeform_format"], "horizontal_tabs");
    assert_eq!(json["ui_tweaks"]["theme"], "cyborg");
}

#[tokio::test]
async fn test_model_presentation_is_case_insensitive() {
    let app = TestApp::new().await;

    let response = app.get("/api/v1/admin/models/STORE.product").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["label"], "STORE.product");
    assert_eq!(json["icon"], "fas fa-th");
    assert_eq!(json["changeform_format"], "horizontal_tabs");
}

#[tokio::test]
async fn test_admin_routes_respect_allowed_hosts() {
    let app = TestApp::new().await;

    let response = app
        .get_with_host("/api/v1/admin/theme", "evil.example.net")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
