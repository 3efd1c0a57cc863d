//! Middleware
//!
//! Tower middleware driven by the security settings.

pub mod cors;
pub mod hosts;
pub mod security;

pub use cors::create_cors_layer;
pub use hosts::{enforce_allowed_hosts, AllowedHosts};
pub use security::{SecurityHeadersConfig, SecurityHeadersLayer};
