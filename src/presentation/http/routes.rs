//! Route Configuration
//!
//! Configures all HTTP routes and the settings-driven middleware chain.

use axum::{http::Uri, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::presentation::middleware::{
    create_cors_layer, enforce_allowed_hosts, AllowedHosts, SecurityHeadersLayer,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main router
///
/// Health probes are exempt from the allowed-hosts check so orchestrators can
/// reach them by pod address.
pub fn create_router(state: AppState) -> Router {
    let settings = state.settings.clone();
    let security = &settings.security;

    Router::new()
        .nest("/api/v1", api_routes(AllowedHosts::from_settings(security)))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .fallback(not_found)
        .layer(SecurityHeadersLayer::from_settings(security))
        .layer(create_cors_layer(security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes(allowed_hosts: AllowedHosts) -> Router<AppState> {
    Router::new()
        .route("/config", get(handlers::client_config::client_config))
        .route("/admin/theme", get(handlers::admin_theme::theme))
        .route(
            "/admin/models/{label}",
            get(handlers::admin_theme::model_presentation),
        )
        .route_layer(middleware::from_fn_with_state(
            allowed_hosts,
            enforce_allowed_hosts,
        ))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
