//! CORS Middleware Configuration

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::config::SecuritySettings;

/// Create CORS layer from settings
///
/// Any origin is accepted when `cors_allow_all_origins` is set; otherwise only
/// the CSRF-trusted origins are.
pub fn create_cors_layer(settings: &SecuritySettings) -> CorsLayer {
    if settings.cors_allow_all_origins {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .csrf_trusted_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600)) // 1 hour default
}
