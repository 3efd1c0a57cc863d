//! Telemetry and Observability
//!
//! Structured logging setup. `RUST_LOG` overrides the default filter and
//! `LOG_FORMAT=json` switches to JSON lines. Both are read from the process
//! environment first and then from the env file, since the env file is never
//! exported into the process.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{EnvFile, EnvSource};

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
const DEFAULT_FILTER: &str = "info,storefront=debug,sqlx=warn,tower_http=debug";

fn lookup(name: &str, env: &impl EnvSource, file: &EnvFile) -> Option<String> {
    env.get(name)
        .or_else(|| file.get(name))
        .filter(|value| !value.trim().is_empty())
}

/// Filter directives to install.
pub fn log_filter(env: &impl EnvSource, file: &EnvFile) -> String {
    lookup(LOG_FILTER_VAR, env, file).unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Whether log lines are emitted as JSON.
pub fn json_output(env: &impl EnvSource, file: &EnvFile) -> bool {
    lookup(LOG_FORMAT_VAR, env, file).is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}

/// Initialize tracing subscriber
pub fn init_tracing(env: &impl EnvSource, file: &EnvFile) {
    let directives = log_filter(env, file);
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_output(env, file) {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(filter = %directives, "Tracing initialized");
}
