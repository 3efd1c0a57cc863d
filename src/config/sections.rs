//! Typed settings sections.
//!
//! Each section is built from the [`LayeredSource`] in one step and validated
//! before it is handed to [`Settings`](super::Settings).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use validator::{Validate, ValidationError};

use super::error::SettingsError;
use super::keys;
use super::secret::Secret;
use super::source::{LayeredSource, Origin};

/// HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        Ok(Self {
            host: source.require(&keys::SERVER_HOST)?,
            port: source.require(&keys::SERVER_PORT)?,
        })
    }

    /// `host:port` pair to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `Cross-Origin-Opener-Policy` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOriginOpenerPolicy {
    SameOrigin,
    SameOriginAllowPopups,
    UnsafeNone,
}

impl CrossOriginOpenerPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameOrigin => "same-origin",
            Self::SameOriginAllowPopups => "same-origin-allow-popups",
            Self::UnsafeNone => "unsafe-none",
        }
    }
}

/// Signing key, debug flag and request origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuritySettings {
    pub secret_key: Secret,
    /// The signing key is the built-in development fallback.
    pub secret_key_is_fallback: bool,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub csrf_trusted_origins: Vec<String>,
    pub cross_origin_opener_policy: CrossOriginOpenerPolicy,
    pub cors_allow_all_origins: bool,
    /// `Strict-Transport-Security` max-age; zero disables the header.
    pub hsts_seconds: u64,
    pub hsts_include_subdomains: bool,
}

/// Hosts accepted in debug mode when `ALLOWED_HOSTS` is empty.
const DEBUG_ALLOWED_HOSTS: [&str; 3] = [".localhost", "127.0.0.1", "[::1]"];

impl SecuritySettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        let debug_flag: bool = source.require(&keys::DEBUG)?;

        // Unset and blank both fall back to the development key.
        let (secret_key, secret_key_is_fallback) =
            match source.optional::<Secret>(&keys::SECRET_KEY)? {
                Some(key) if source.origin(&keys::SECRET_KEY) != Origin::Default => (key, false),
                _ => (Secret::from(keys::INSECURE_SECRET_KEY), true),
            };

        if secret_key_is_fallback {
            tracing::warn!(
                debug_mode = debug_flag,
                "DJANGO_SECRET_KEY is not set; signing with an insecure development key"
            );
        }

        Ok(Self {
            secret_key,
            secret_key_is_fallback,
            debug: debug_flag,
            allowed_hosts: source.require(&keys::ALLOWED_HOSTS)?,
            csrf_trusted_origins: source.require(&keys::CSRF_TRUSTED_ORIGINS)?,
            cross_origin_opener_policy: CrossOriginOpenerPolicy::SameOriginAllowPopups,
            cors_allow_all_origins: true,
            hsts_seconds: source.require(&keys::SECURE_HSTS_SECONDS)?,
            hsts_include_subdomains: source.require(&keys::SECURE_HSTS_INCLUDE_SUBDOMAINS)?,
        })
    }

    /// Host patterns to enforce on incoming requests.
    ///
    /// An empty list in debug mode falls back to the loopback hosts.
    pub fn effective_allowed_hosts(&self) -> Vec<String> {
        if self.allowed_hosts.is_empty() && self.debug {
            DEBUG_ALLOWED_HOSTS.iter().map(|h| h.to_string()).collect()
        } else {
            self.allowed_hosts.clone()
        }
    }
}

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    Postgresql,
}

/// PostgreSQL connection parameters.
///
/// Unset fields are left to the driver's own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub engine: DatabaseEngine,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Maximum lifetime of a pooled connection.
    pub conn_max_age: Duration,
}

impl DatabaseSettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        Ok(Self {
            engine: DatabaseEngine::Postgresql,
            name: source.optional(&keys::POSTGRES_NAME)?,
            user: source.optional(&keys::POSTGRES_USER)?,
            password: source.optional(&keys::POSTGRES_PASSWORD)?,
            host: source.optional(&keys::POSTGRES_HOST)?,
            port: source.optional(&keys::POSTGRES_PORT)?,
            conn_max_age: source.require(&keys::POSTGRES_CONN_MAX_AGE)?,
        })
    }
}

pub const S3_DOMAIN_SUFFIX: &str = "s3.amazonaws.com";
pub const STATIC_LOCATION: &str = "static";

/// S3-compatible object storage for static and media assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<Secret>,
    pub bucket_name: Option<String>,
    pub file_overwrite: bool,
    pub default_acl: String,
    pub cache_control: String,
    pub location: String,
    /// `<bucket>.s3.amazonaws.com`, computed at resolution.
    pub custom_domain: Option<String>,
    /// `https://<custom_domain>/static/`, computed at resolution.
    pub bucket_static_url: Option<String>,
}

impl StorageSettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        let bucket_name: Option<String> = source.optional(&keys::AWS_STORAGE_BUCKET_NAME)?;
        let custom_domain = bucket_name
            .as_ref()
            .map(|bucket| format!("{bucket}.{S3_DOMAIN_SUFFIX}"));
        let bucket_static_url = custom_domain
            .as_ref()
            .map(|domain| format!("https://{domain}/{STATIC_LOCATION}/"));

        Ok(Self {
            access_key_id: source.optional(&keys::AWS_ACCESS_KEY_ID)?,
            secret_access_key: source.optional(&keys::AWS_SECRET_ACCESS_KEY)?,
            bucket_name,
            file_overwrite: false,
            default_acl: "public-read".to_string(),
            cache_control: "max-age=86400".to_string(),
            location: STATIC_LOCATION.to_string(),
            custom_domain,
            bucket_static_url,
        })
    }
}

/// Local static and media file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFilesSettings {
    pub static_url: String,
    pub static_root: PathBuf,
    pub staticfiles_dirs: Vec<PathBuf>,
    pub media_url: String,
    pub media_root: PathBuf,
}

impl StaticFilesSettings {
    pub(crate) fn resolve(base_dir: &Path, storage: &StorageSettings) -> Self {
        // The local path is assigned after the bucket URL and wins.
        if let Some(bucket_url) = &storage.bucket_static_url {
            tracing::warn!(
                %bucket_url,
                static_url = "static/",
                "bucket static URL is computed but overridden by the local static URL"
            );
        }

        Self {
            static_url: "static/".to_string(),
            static_root: base_dir.join("staticfiles"),
            staticfiles_dirs: vec![base_dir.join("static")],
            media_url: "media/".to_string(),
            media_root: base_dir.join("media"),
        }
    }
}

/// Stripe API key pair.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct StripeKeys {
    #[validate(length(min = 1))]
    pub public_key: String,
    #[validate(custom(function = "not_blank"))]
    pub secret_key: Secret,
}

/// PayPal REST credentials.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PaypalKeys {
    #[validate(length(min = 1))]
    pub client_id: String,
    #[validate(custom(function = "not_blank"))]
    pub secret_id: Secret,
}

/// Payment provider credentials. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PaymentSettings {
    #[validate(nested)]
    pub stripe: StripeKeys,
    #[validate(nested)]
    pub paypal: PaypalKeys,
}

impl PaymentSettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        let payments = Self {
            stripe: StripeKeys {
                public_key: source.require(&keys::STRIPE_PUBLIC_KEY)?,
                secret_key: source.require(&keys::STRIPE_SECRET_KEY)?,
            },
            paypal: PaypalKeys {
                client_id: source.require(&keys::PAYPAL_CLIENT_ID)?,
                secret_id: source.require(&keys::PAYPAL_SECRET_ID)?,
            },
        };
        payments
            .validate()
            .map_err(SettingsError::invalid("payment"))?;
        Ok(payments)
    }
}

fn not_blank(secret: &Secret) -> Result<(), ValidationError> {
    if secret.is_blank() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Transactional e-mail backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackend {
    Mailgun,
}

/// Outgoing e-mail provider and sender addresses.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct EmailSettings {
    pub backend: EmailBackend,
    pub mailgun_api_key: Option<Secret>,
    pub mailgun_sender_domain: Option<String>,
    #[validate(email)]
    pub from_email: String,
    #[validate(email)]
    pub default_from_email: String,
    #[validate(email)]
    pub server_email: String,
}

impl EmailSettings {
    pub(crate) fn resolve(source: &LayeredSource) -> Result<Self, SettingsError> {
        let email = Self {
            backend: EmailBackend::Mailgun,
            mailgun_api_key: source.optional(&keys::MAILGUN_API_KEY)?,
            mailgun_sender_domain: source.optional(&keys::MAILGUN_SENDER_DOMAIN)?,
            from_email: source.require(&keys::FROM_EMAIL)?,
            default_from_email: source.require(&keys::DEFAULT_FROM_EMAIL)?,
            server_email: source.require(&keys::SERVER_EMAIL)?,
        };
        email.validate().map_err(SettingsError::invalid("email"))?;

        if !email.is_deliverable() {
            tracing::warn!("Mailgun credentials are incomplete; outgoing e-mail will fail");
        }
        Ok(email)
    }

    /// Both the API key and the sender domain are configured.
    pub fn is_deliverable(&self) -> bool {
        self.mailgun_api_key.is_some() && self.mailgun_sender_domain.is_some()
    }
}

/// Language and time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_i18n: true,
            use_tz: true,
        }
    }
}
