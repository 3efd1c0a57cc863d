//! Presentation Layer
//!
//! HTTP routes and the middleware chain built from settings.

pub mod http;
pub mod middleware;
