//! Resolution from the environment alone.

use std::time::Duration;

use pretty_assertions::assert_eq;
use test_case::test_case;

use storefront::config::{
    keys, DatabaseEngine, DatabaseSettings, Resolver, SettingsError,
};

use crate::common::{required_env, settings_from};

#[test_case("SITE_URL")]
#[test_case("STRIPE_PUBLIC_KEY")]
#[test_case("STRIPE_SECRET_KEY")]
#[test_case("PAYPAL_CLIENT_ID")]
#[test_case("PAYPAL_SECRET_ID")]
fn test_missing_required_key_names_it(name: &str) {
    let mut env = required_env();
    env.remove(name);

    let err = Resolver::new(env).resolve().unwrap_err();

    assert!(
        matches!(err, SettingsError::MissingRequired { key } if key == name),
        "unexpected error: {err}"
    );
}

#[test]
fn test_every_required_key_is_covered() {
    let names: Vec<_> = keys::required().map(|k| k.name).collect();
    assert_eq!(
        names,
        vec![
            "SITE_URL",
            "STRIPE_PUBLIC_KEY",
            "STRIPE_SECRET_KEY",
            "PAYPAL_CLIENT_ID",
            "PAYPAL_SECRET_ID",
        ]
    );
}

#[test_case("true", true ; "lowercase true")]
#[test_case("True", true ; "titlecase true")]
#[test_case("TRUE", true ; "uppercase true")]
#[test_case("false", false ; "lowercase false")]
#[test_case("False", false ; "titlecase false")]
#[test_case("FALSE", false ; "uppercase false")]
fn test_debug_flag_variants(raw: &str, expected: bool) {
    let mut env = required_env();
    env.set("DJANGO_DEBUG", raw);

    assert_eq!(settings_from(env).security.debug, expected);
}

#[test]
fn test_blank_debug_flag_means_off() {
    let mut env = required_env();
    env.set("DJANGO_DEBUG", "");

    assert!(!settings_from(env).security.debug);
}

#[test]
fn test_unrecognized_boolean_is_a_coercion_error() {
    let mut env = required_env();
    env.set("DJANGO_DEBUG", "maybe");

    let err = Resolver::new(env).resolve().unwrap_err();

    match err {
        SettingsError::TypeCoercion { key, value, expected } => {
            assert_eq!(key, "DJANGO_DEBUG");
            assert_eq!(value, "maybe");
            assert_eq!(expected, "boolean");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_port_is_a_coercion_error() {
    let mut env = required_env();
    env.set("POSTGRES_PORT", "five");

    let err = Resolver::new(env).resolve().unwrap_err();

    assert_eq!(err.key(), Some("POSTGRES_PORT"));
    assert!(matches!(err, SettingsError::TypeCoercion { .. }));
}

#[test]
fn test_malformed_url_is_reported_with_its_value() {
    let mut env = required_env();
    env.set("SITE_URL", "not a url");

    let err = Resolver::new(env).resolve().unwrap_err();

    assert_eq!(err.key(), Some("SITE_URL"));
    assert!(err.to_string().contains("not a url"));
}

#[test]
fn test_non_http_site_url_is_rejected() {
    let mut env = required_env();
    env.set("SITE_URL", "ftp://shop.example.com");

    let err = Resolver::new(env).resolve().unwrap_err();

    assert!(matches!(err, SettingsError::TypeCoercion { key: "SITE_URL", .. }));
}

#[test]
fn test_empty_allowed_hosts_is_empty_list() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "");

    assert!(settings_from(env).security.allowed_hosts.is_empty());
}

#[test]
fn test_allowed_hosts_drop_empty_segments() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "a.com,,b.com");

    assert_eq!(
        settings_from(env).security.allowed_hosts,
        vec!["a.com".to_string(), "b.com".to_string()]
    );
}

#[test]
fn test_csrf_origins_are_trimmed() {
    let mut env = required_env();
    env.set(
        "CSRF_TRUSTED_ORIGINS",
        " https://shop.example.com , https://admin.example.com ,",
    );

    assert_eq!(
        settings_from(env).security.csrf_trusted_origins,
        vec![
            "https://shop.example.com".to_string(),
            "https://admin.example.com".to_string()
        ]
    );
}

#[test]
fn test_env_value_beats_default() {
    let defaults = settings_from(required_env());
    assert_eq!(defaults.database.conn_max_age, Duration::from_secs(600));
    assert_eq!(defaults.email.from_email, "webmaster@example.com");

    let mut env = required_env();
    env.set("POSTGRES_CONN_MAX_AGE", "2m");
    env.set("FROM_EMAIL", "orders@shop.example.com");
    let settings = settings_from(env);

    assert_eq!(settings.database.conn_max_age, Duration::from_secs(120));
    assert_eq!(settings.email.from_email, "orders@shop.example.com");
}

#[test]
fn test_secret_key_env_replaces_fallback() {
    let fallback = settings_from(required_env());
    assert!(fallback.security.secret_key_is_fallback);

    let mut env = required_env();
    env.set("DJANGO_SECRET_KEY", "prod-signing-key");
    let settings = settings_from(env);

    assert!(!settings.security.secret_key_is_fallback);
    assert_eq!(settings.security.secret_key.expose(), "prod-signing-key");
    assert_eq!(settings.jwt.signing_key.expose(), "prod-signing-key");
}

#[test]
fn test_blank_secret_key_uses_fallback_for_signing() {
    let mut env = required_env();
    env.set("DJANGO_SECRET_KEY", "");
    let settings = settings_from(env);

    assert!(settings.security.secret_key_is_fallback);
    assert_eq!(settings.security.secret_key.expose(), keys::INSECURE_SECRET_KEY);
    assert!(!settings.jwt.signing_key.expose().is_empty());
}

#[test]
fn test_hsts_settings_from_env() {
    let mut env = required_env();
    env.set("SECURE_HSTS_SECONDS", "3600");
    env.set("SECURE_HSTS_INCLUDE_SUBDOMAINS", "yes");
    let settings = settings_from(env);

    assert_eq!(settings.security.hsts_seconds, 3600);
    assert!(settings.security.hsts_include_subdomains);
}

#[test]
fn test_resolution_is_idempotent() {
    let mut env = required_env();
    env.set("ALLOWED_HOSTS", "shop.example.com,.example.com");
    env.set("AWS_STORAGE_BUCKET_NAME", "shop-assets");

    let resolver = Resolver::new(env);
    let first = resolver.resolve().unwrap();
    let second = resolver.resolve().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_storage_domain_computed_from_bucket() {
    let mut env = required_env();
    env.set("AWS_STORAGE_BUCKET_NAME", "shop-assets");
    let settings = settings_from(env);

    assert_eq!(
        settings.storage.custom_domain.as_deref(),
        Some("shop-assets.s3.amazonaws.com")
    );
    assert_eq!(
        settings.storage.bucket_static_url.as_deref(),
        Some("https://shop-assets.s3.amazonaws.com/static/")
    );
    // The local static URL still takes precedence.
    assert_eq!(settings.static_files.static_url, "static/");
}

#[test]
fn test_storage_domain_absent_without_bucket() {
    let settings = settings_from(required_env());

    assert_eq!(settings.storage.custom_domain, None);
    assert_eq!(settings.storage.bucket_static_url, None);
}

#[test]
fn test_invalid_sender_address_fails_validation() {
    let mut env = required_env();
    env.set("SERVER_EMAIL", "not-an-address");

    let err = Resolver::new(env).resolve().unwrap_err();

    assert!(matches!(err, SettingsError::Invalid { section: "email", .. }));
}

#[test]
fn test_blank_payment_secret_fails_validation() {
    let mut env = required_env();
    env.set("STRIPE_SECRET_KEY", "   ");

    let err = Resolver::new(env).resolve().unwrap_err();

    assert!(matches!(err, SettingsError::Invalid { section: "payment", .. }));
}

#[test]
fn test_database_section_end_to_end() {
    let mut env = required_env();
    env.set("SITE_URL", "https://shop.example");
    env.set("POSTGRES_NAME", "shop");
    env.set("POSTGRES_USER", "shop_user");
    env.set("POSTGRES_HOST", "db");
    env.set("POSTGRES_PORT", "5432");

    let settings = settings_from(env);

    assert_eq!(settings.site_url.as_str(), "https://shop.example");
    assert_eq!(
        settings.database,
        DatabaseSettings {
            engine: DatabaseEngine::Postgresql,
            name: Some("shop".to_string()),
            user: Some("shop_user".to_string()),
            password: None,
            host: Some("db".to_string()),
            port: Some(5432),
            conn_max_age: Duration::from_secs(600),
        }
    );
}
