//! # Storefront
//!
//! Application entry point. Startup order:
//! - Env file (parsed once, shared by logging and settings)
//! - Tracing/logging subsystem
//! - Settings resolution (exits on any configuration error)
//! - Database pool (lazy)
//! - HTTP server

use anyhow::Result;
use tracing::{error, info};

use storefront::config::{EnvFile, Resolver, StdEnv};
use storefront::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Errors here are reported once tracing is up.
    let prepared = Resolver::from_process().and_then(|resolver| {
        let env_file = resolver.load_env_file()?;
        Ok((resolver, env_file))
    });

    let no_file = EnvFile::default();
    let log_file = match &prepared {
        Ok((_, env_file)) => env_file,
        Err(_) => &no_file,
    };
    storefront::telemetry::init_tracing(&StdEnv, log_file);

    info!("Starting Storefront...");

    let resolved = prepared.and_then(|(resolver, env_file)| resolver.resolve_with(&env_file));
    let settings = match resolved {
        Ok(settings) => settings,
        Err(err) => {
            error!(key = err.key(), "Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };
    info!(
        bind = %settings.server.bind_addr(),
        debug = settings.security.debug,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
