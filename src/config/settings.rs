//! Resolved settings and the resolver that produces them.

use std::path::{Path, PathBuf};

use super::admin::AdminSettings;
use super::cast::HttpUrl;
use super::error::SettingsError;
use super::jwt::JwtSettings;
use super::keys;
use super::sections::{
    DatabaseSettings, EmailSettings, LocaleSettings, PaymentSettings, SecuritySettings,
    ServerSettings, StaticFilesSettings, StorageSettings,
};
use super::source::{EnvFile, EnvSource, LayeredSource, StdEnv};

/// Env var naming the env file to read; defaults to [`DEFAULT_ENV_FILE`].
pub const ENV_FILE_VAR: &str = "ENV_FILE";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Root configuration structure containing all application settings.
///
/// Built once by [`Resolver::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Public base URL of the storefront
    pub site_url: HttpUrl,

    /// HTTP listener
    pub server: ServerSettings,

    /// Signing key, debug flag, host and origin policy
    pub security: SecuritySettings,

    /// PostgreSQL connection parameters
    pub database: DatabaseSettings,

    /// Object storage for static/media assets
    pub storage: StorageSettings,

    /// Local static/media paths
    pub static_files: StaticFilesSettings,

    /// API token parameters
    pub jwt: JwtSettings,

    /// Stripe and PayPal credentials
    pub payments: PaymentSettings,

    /// Transactional e-mail
    pub email: EmailSettings,

    pub locale: LocaleSettings,

    /// Admin dashboard theme
    pub admin: AdminSettings,
}

impl Settings {
    /// Resolve from the process environment, the env file named by
    /// `ENV_FILE` (default `.env`) and the current directory.
    ///
    /// # Errors
    ///
    /// Fails on a missing required key, a malformed value, an unreadable env
    /// file or a section that does not validate.
    pub fn load() -> Result<Self, SettingsError> {
        Resolver::from_process()?.resolve()
    }
}

/// Builds [`Settings`] from an environment source, an optional env file and
/// a base directory for local paths.
#[derive(Debug, Clone)]
pub struct Resolver<E = StdEnv> {
    env: E,
    env_file: Option<PathBuf>,
    base_dir: PathBuf,
}

impl Resolver<StdEnv> {
    /// Resolver over the real process environment.
    pub fn from_process() -> Result<Self, SettingsError> {
        let env_file = StdEnv
            .get(ENV_FILE_VAR)
            .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string());
        let base_dir = std::env::current_dir().map_err(SettingsError::BaseDir)?;

        Ok(Resolver::new(StdEnv)
            .env_file(env_file)
            .base_dir(base_dir))
    }
}

impl<E: EnvSource> Resolver<E> {
    /// Resolver over `env` with no env file and `.` as base directory.
    pub fn new(env: E) -> Self {
        Self {
            env,
            env_file: None,
            base_dir: PathBuf::from("."),
        }
    }

    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_dir = path.into();
        self
    }

    pub fn base_dir_path(&self) -> &Path {
        &self.base_dir
    }

    /// Produce a fully populated [`Settings`].
    ///
    /// Reads the environment and the env file only. Fails on the first
    /// problem; nothing is deferred to first use.
    pub fn resolve(&self) -> Result<Settings, SettingsError> {
        let env_file = self.load_env_file()?;
        self.resolve_with(&env_file)
    }

    /// Parse the configured env file; empty when none is configured.
    pub fn load_env_file(&self) -> Result<EnvFile, SettingsError> {
        match &self.env_file {
            Some(path) => EnvFile::load(path),
            None => Ok(EnvFile::default()),
        }
    }

    /// Like [`resolve`](Self::resolve), over an env file the caller already
    /// parsed with [`load_env_file`](Self::load_env_file).
    pub fn resolve_with(&self, env_file: &EnvFile) -> Result<Settings, SettingsError> {
        let source = LayeredSource::build(&self.env, env_file)?;

        // Required keys are checked up front so the error names the first
        // missing key in declaration order.
        for key in keys::required() {
            source.require::<String>(key)?;
        }

        let site_url: HttpUrl = source.require(&keys::SITE_URL)?;
        let security = SecuritySettings::resolve(&source)?;
        let storage = StorageSettings::resolve(&source)?;
        let static_files = StaticFilesSettings::resolve(&self.base_dir, &storage);
        let jwt = JwtSettings::resolve(&source, &security.secret_key)?;

        let settings = Settings {
            site_url,
            server: ServerSettings::resolve(&source)?,
            database: DatabaseSettings::resolve(&source)?,
            payments: PaymentSettings::resolve(&source)?,
            email: EmailSettings::resolve(&source)?,
            locale: LocaleSettings::default(),
            admin: AdminSettings::default(),
            security,
            storage,
            static_files,
            jwt,
        };

        tracing::info!(
            site_url = %settings.site_url,
            debug = settings.security.debug,
            allowed_hosts = settings.security.allowed_hosts.len(),
            database_host = settings.database.host.as_deref().unwrap_or("<unset>"),
            bucket = settings.storage.bucket_name.as_deref().unwrap_or("<unset>"),
            env_file_vars = env_file.len(),
            defaults = source.defaulted().count(),
            "Settings resolved"
        );

        Ok(settings)
    }
}
