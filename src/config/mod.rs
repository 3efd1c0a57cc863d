//! # Configuration Module
//!
//! Resolves the storefront's runtime settings exactly once at startup.
//! Values are layered, highest priority first:
//! - Process environment variables
//! - A local env file (`.env` by default, parsed with dotenvy, never exported)
//! - Hardcoded defaults declared in [`keys`]
//!
//! Required keys (site URL, payment credentials) abort resolution when absent.
//! The resulting [`Settings`] is immutable and shared behind an `Arc`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Serving {} on {}", settings.site_url, settings.server.bind_addr());
//! ```

mod admin;
mod cast;
mod error;
mod jwt;
pub mod keys;
mod secret;
mod sections;
mod settings;
mod source;

pub use admin::*;
pub use cast::{Cast, HttpUrl};
pub use error::SettingsError;
pub use jwt::JwtSettings;
pub use secret::Secret;
pub use sections::*;
pub use settings::*;
pub use source::{EnvFile, EnvSource, LayeredSource, MapEnv, Origin, StdEnv};
