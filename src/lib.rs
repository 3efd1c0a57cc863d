//! # Storefront Library
//!
//! Runtime settings and server bootstrap for the storefront e-commerce backend:
//! - Layered settings resolution (environment, `.env` file, defaults)
//! - PostgreSQL pool configuration
//! - HTTP middleware driven by settings (allowed hosts, CORS, security headers)
//! - Health and public client-configuration endpoints
//!
//! ## Module Structure
//!
//! ```text
//! storefront/
//! +-- config/         Settings resolution
//! +-- infrastructure/ Database pool
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
