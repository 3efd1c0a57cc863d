//! Resolution with an env file layered under the environment.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use storefront::config::{MapEnv, Resolver, SettingsError};

use crate::common::required_env;

fn env_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn test_env_file_beats_default() {
    let file = env_file(&["POSTGRES_HOST=file-db", "DJANGO_DEBUG=on"]);

    let settings = Resolver::new(required_env())
        .env_file(file.path())
        .resolve()
        .unwrap();

    assert_eq!(settings.database.host.as_deref(), Some("file-db"));
    assert!(settings.security.debug);
}

#[test]
fn test_environment_beats_env_file() {
    let file = env_file(&["POSTGRES_HOST=file-db", "ALLOWED_HOSTS=file.example.com"]);
    let mut env = required_env();
    env.set("POSTGRES_HOST", "env-db");

    let settings = Resolver::new(env)
        .env_file(file.path())
        .resolve()
        .unwrap();

    assert_eq!(settings.database.host.as_deref(), Some("env-db"));
    assert_eq!(settings.security.allowed_hosts, vec!["file.example.com".to_string()]);
}

#[test]
fn test_quoted_and_commented_env_file() {
    let file = env_file(&[
        "# storefront settings",
        "SITE_URL=\"https://quoted.example\"",
        "STRIPE_PUBLIC_KEY='pk_quoted'",
        "STRIPE_SECRET_KEY=sk_quoted",
        "PAYPAL_CLIENT_ID=client",
        "PAYPAL_SECRET_ID=secret",
    ]);

    let settings = Resolver::new(MapEnv::new())
        .env_file(file.path())
        .resolve()
        .unwrap();

    assert_eq!(settings.site_url.as_str(), "https://quoted.example");
    assert_eq!(settings.payments.stripe.public_key, "pk_quoted");
}

#[test]
fn test_missing_env_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Resolver::new(required_env())
        .env_file(dir.path().join("absent.env"))
        .resolve()
        .unwrap();

    assert_eq!(settings.payments.paypal.client_id, "paypal-client-id");
}

#[test]
fn test_malformed_env_file_fails() {
    let file = env_file(&["SITE_URL=\"unterminated"]);

    let err = Resolver::new(required_env())
        .env_file(file.path())
        .resolve()
        .unwrap_err();

    assert!(matches!(err, SettingsError::EnvFile { .. }));
}

#[test]
fn test_missing_required_key_in_both_layers() {
    let file = env_file(&["SITE_URL=https://shop.example"]);

    let err = Resolver::new(MapEnv::new())
        .env_file(file.path())
        .resolve()
        .unwrap_err();

    assert_eq!(err.key(), Some("STRIPE_PUBLIC_KEY"));
}
