//! Database Module
//!
//! PostgreSQL connection options and pool construction.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;

/// Time to wait for a pooled connection before failing a query.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Build connect options from the database section.
///
/// Unset fields keep the driver defaults (`PG*` variables, then localhost).
pub fn connect_options(settings: &DatabaseSettings) -> PgConnectOptions {
    let mut options = PgConnectOptions::new();
    if let Some(host) = &settings.host {
        options = options.host(host);
    }
    if let Some(port) = settings.port {
        options = options.port(port);
    }
    if let Some(user) = &settings.user {
        options = options.username(user);
    }
    if let Some(password) = &settings.password {
        options = options.password(password.expose());
    }
    if let Some(name) = &settings.name {
        options = options.database(name);
    }
    options
}

/// Create a PostgreSQL connection pool.
///
/// The pool is lazy: no connection is opened until the first query.
pub fn create_pool(settings: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .max_lifetime(settings.conn_max_age)
        .connect_lazy_with(connect_options(settings))
}
