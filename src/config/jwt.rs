//! JWT parameters for API authentication.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use super::error::SettingsError;
use super::keys;
use super::secret::Secret;
use super::source::LayeredSource;

/// Token lifetimes, signing parameters and header/claim conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct JwtSettings {
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
    pub rotate_refresh_tokens: bool,
    pub blacklist_after_rotation: bool,
    pub update_last_login: bool,

    pub algorithm: Algorithm,
    /// Defaults to the site secret key.
    pub signing_key: Secret,
    pub verifying_key: Option<String>,
    pub audience: Option<String>,
    pub issuer: Option<String>,
    pub jwk_url: Option<String>,
    pub leeway: Duration,

    pub auth_header_types: Vec<String>,
    pub auth_header_name: String,
    pub user_id_field: String,
    pub user_id_claim: String,
    pub token_type_claim: String,
    pub jti_claim: String,

    pub sliding_token_refresh_exp_claim: String,
    pub sliding_token_lifetime: Duration,
    pub sliding_token_refresh_lifetime: Duration,
}

impl JwtSettings {
    pub(crate) fn resolve(source: &LayeredSource, secret_key: &Secret) -> Result<Self, SettingsError> {
        Ok(Self {
            access_token_lifetime: source.require(&keys::JWT_ACCESS_TOKEN_LIFETIME)?,
            refresh_token_lifetime: source.require(&keys::JWT_REFRESH_TOKEN_LIFETIME)?,
            rotate_refresh_tokens: true,
            blacklist_after_rotation: true,
            update_last_login: false,

            algorithm: Algorithm::HS256,
            signing_key: secret_key.clone(),
            verifying_key: None,
            audience: None,
            issuer: None,
            jwk_url: None,
            leeway: Duration::ZERO,

            auth_header_types: vec!["Bearer".to_string()],
            auth_header_name: "Authorization".to_string(),
            user_id_field: "id".to_string(),
            user_id_claim: "user_id".to_string(),
            token_type_claim: "token_type".to_string(),
            jti_claim: "jti".to_string(),

            sliding_token_refresh_exp_claim: "refresh_exp".to_string(),
            sliding_token_lifetime: Duration::from_secs(5 * 60),
            sliding_token_refresh_lifetime: Duration::from_secs(24 * 60 * 60),
        })
    }

    /// Validation rules for incoming tokens.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = self.leeway.as_secs();
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation
    }

    /// Key for verifying HMAC-signed tokens.
    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.signing_key.expose().as_bytes())
    }

    /// Extract the token from an authorization header value.
    ///
    /// Returns `None` unless the value starts with one of the configured
    /// header types followed by a single space.
    pub fn token_from_header<'a>(&self, value: &'a str) -> Option<&'a str> {
        let (kind, token) = value.split_once(' ')?;
        let token = token.trim();
        if token.is_empty() || token.contains(' ') {
            return None;
        }
        self.auth_header_types
            .iter()
            .any(|t| t == kind)
            .then_some(token)
    }
}
