//! Infrastructure Layer
//!
//! Adapters that turn resolved settings into live clients:
//! - Database pool (PostgreSQL)

pub mod database;
