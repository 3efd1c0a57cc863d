//! Declared configuration keys.
//!
//! Environment variable names are the contract with deployment tooling and
//! must not be renamed. Every key read during resolution is listed in [`ALL`].

/// Expected shape of a raw string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    String,
    Bool,
    Integer,
    /// Seconds, or a number suffixed with `s`, `m`, `h` or `d`.
    Duration,
    /// Comma-separated, empty entries dropped.
    List,
    /// Absolute `http`/`https` URL.
    Url,
}

impl KeyKind {
    /// Human readable description used in coercion errors.
    pub fn expected(self) -> &'static str {
        match self {
            KeyKind::String => "string",
            KeyKind::Bool => "boolean",
            KeyKind::Integer => "integer",
            KeyKind::Duration => "duration",
            KeyKind::List => "comma-separated list",
            KeyKind::Url => "http(s) URL",
        }
    }
}

/// What happens when no layer provides a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Resolution fails.
    Required,
    /// The raw default is cast like any other value.
    Default(&'static str),
    /// The field stays unset.
    Optional,
}

/// A single environment-driven setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub name: &'static str,
    pub kind: KeyKind,
    pub requirement: Requirement,
    /// Values are never logged or echoed in errors.
    pub secret: bool,
}

impl Key {
    const fn required(name: &'static str, kind: KeyKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Required,
            secret: false,
        }
    }

    const fn optional(name: &'static str, kind: KeyKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Optional,
            secret: false,
        }
    }

    const fn with_default(name: &'static str, kind: KeyKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Default(default),
            secret: false,
        }
    }

    const fn secret(self) -> Self {
        Self {
            secret: true,
            ..self
        }
    }

    /// Path of the key inside the layered store.
    pub fn path(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    pub fn default_value(&self) -> Option<&'static str> {
        match self.requirement {
            Requirement::Default(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required)
    }
}

/// Development-only signing key used when `DJANGO_SECRET_KEY` is absent or blank.
pub const INSECURE_SECRET_KEY: &str = "insecure-development-key-set-DJANGO_SECRET_KEY-in-production";

// Identity / security
pub const SECRET_KEY: Key =
    Key::with_default("DJANGO_SECRET_KEY", KeyKind::String, INSECURE_SECRET_KEY).secret();
pub const DEBUG: Key = Key::with_default("DJANGO_DEBUG", KeyKind::Bool, "false");
pub const ALLOWED_HOSTS: Key = Key::with_default("ALLOWED_HOSTS", KeyKind::List, "");
pub const CSRF_TRUSTED_ORIGINS: Key = Key::with_default("CSRF_TRUSTED_ORIGINS", KeyKind::List, "");
pub const SITE_URL: Key = Key::required("SITE_URL", KeyKind::Url);
/// `Strict-Transport-Security` max-age in seconds; `0` disables the header.
pub const SECURE_HSTS_SECONDS: Key = Key::with_default("SECURE_HSTS_SECONDS", KeyKind::Integer, "0");
pub const SECURE_HSTS_INCLUDE_SUBDOMAINS: Key =
    Key::with_default("SECURE_HSTS_INCLUDE_SUBDOMAINS", KeyKind::Bool, "false");

// HTTP server
pub const SERVER_HOST: Key = Key::with_default("SERVER_HOST", KeyKind::String, "0.0.0.0");
pub const SERVER_PORT: Key = Key::with_default("SERVER_PORT", KeyKind::Integer, "8000");

// Database
pub const POSTGRES_NAME: Key = Key::optional("POSTGRES_NAME", KeyKind::String);
pub const POSTGRES_USER: Key = Key::optional("POSTGRES_USER", KeyKind::String);
pub const POSTGRES_PASSWORD: Key = Key::optional("POSTGRES_PASSWORD", KeyKind::String).secret();
pub const POSTGRES_HOST: Key = Key::optional("POSTGRES_HOST", KeyKind::String);
pub const POSTGRES_PORT: Key = Key::optional("POSTGRES_PORT", KeyKind::Integer);
pub const POSTGRES_CONN_MAX_AGE: Key =
    Key::with_default("POSTGRES_CONN_MAX_AGE", KeyKind::Duration, "600");

// Object storage
pub const AWS_ACCESS_KEY_ID: Key = Key::optional("AWS_ACCESS_KEY_ID", KeyKind::String);
pub const AWS_SECRET_ACCESS_KEY: Key =
    Key::optional("AWS_SECRET_ACCESS_KEY", KeyKind::String).secret();
pub const AWS_STORAGE_BUCKET_NAME: Key = Key::optional("AWS_STORAGE_BUCKET_NAME", KeyKind::String);

// Tokens
pub const JWT_ACCESS_TOKEN_LIFETIME: Key =
    Key::with_default("JWT_ACCESS_TOKEN_LIFETIME", KeyKind::Duration, "5m");
pub const JWT_REFRESH_TOKEN_LIFETIME: Key =
    Key::with_default("JWT_REFRESH_TOKEN_LIFETIME", KeyKind::Duration, "50d");

// Payments
pub const STRIPE_PUBLIC_KEY: Key = Key::required("STRIPE_PUBLIC_KEY", KeyKind::String);
pub const STRIPE_SECRET_KEY: Key = Key::required("STRIPE_SECRET_KEY", KeyKind::String).secret();
pub const PAYPAL_CLIENT_ID: Key = Key::required("PAYPAL_CLIENT_ID", KeyKind::String);
pub const PAYPAL_SECRET_ID: Key = Key::required("PAYPAL_SECRET_ID", KeyKind::String).secret();

// Email
pub const MAILGUN_API_KEY: Key = Key::optional("MAILGUN_API_KEY", KeyKind::String).secret();
pub const MAILGUN_SENDER_DOMAIN: Key = Key::optional("MAILGUN_SENDER_DOMAIN", KeyKind::String);
pub const FROM_EMAIL: Key = Key::with_default("FROM_EMAIL", KeyKind::String, "webmaster@example.com");
pub const DEFAULT_FROM_EMAIL: Key =
    Key::with_default("DEFAULT_FROM_EMAIL", KeyKind::String, "webmaster@example.com");
pub const SERVER_EMAIL: Key = Key::with_default("SERVER_EMAIL", KeyKind::String, "root@example.com");

/// Every key consulted by the resolver, in resolution order.
pub const ALL: &[Key] = &[
    SECRET_KEY,
    DEBUG,
    ALLOWED_HOSTS,
    CSRF_TRUSTED_ORIGINS,
    SITE_URL,
    SECURE_HSTS_SECONDS,
    SECURE_HSTS_INCLUDE_SUBDOMAINS,
    SERVER_HOST,
    SERVER_PORT,
    POSTGRES_NAME,
    POSTGRES_USER,
    POSTGRES_PASSWORD,
    POSTGRES_HOST,
    POSTGRES_PORT,
    POSTGRES_CONN_MAX_AGE,
    AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
    AWS_STORAGE_BUCKET_NAME,
    JWT_ACCESS_TOKEN_LIFETIME,
    JWT_REFRESH_TOKEN_LIFETIME,
    STRIPE_PUBLIC_KEY,
    STRIPE_SECRET_KEY,
    PAYPAL_CLIENT_ID,
    PAYPAL_SECRET_ID,
    MAILGUN_API_KEY,
    MAILGUN_SENDER_DOMAIN,
    FROM_EMAIL,
    DEFAULT_FROM_EMAIL,
    SERVER_EMAIL,
];

/// Keys that fail resolution when absent.
pub fn required() -> impl Iterator<Item = &'static Key> {
    ALL.iter().filter(|key| key.is_required())
}
