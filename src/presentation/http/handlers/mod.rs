//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod admin_theme;
pub mod client_config;
pub mod health;
