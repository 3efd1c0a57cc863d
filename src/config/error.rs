//! Settings resolution errors.

use std::path::PathBuf;

use super::keys::Key;

/// Errors raised while resolving settings. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required configuration `{key}`")]
    MissingRequired { key: &'static str },

    #[error("`{key}` = {value:?} cannot be read as {expected}")]
    TypeCoercion {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to read env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid {section} settings: {source}")]
    Invalid {
        section: &'static str,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("failed to determine base directory: {0}")]
    BaseDir(#[source] std::io::Error),

    #[error("configuration layering failed: {0}")]
    Layer(#[from] config::ConfigError),
}

impl SettingsError {
    /// Coercion failure for `key`. Values of secret keys are redacted.
    pub fn type_coercion(key: &Key, raw: &str) -> Self {
        let value = if key.secret {
            "<redacted>".to_string()
        } else {
            raw.to_string()
        };
        Self::TypeCoercion {
            key: key.name,
            value,
            expected: key.kind.expected(),
        }
    }

    /// Name of the offending key, when the error is tied to one.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequired { key } | Self::TypeCoercion { key, .. } => Some(key),
            _ => None,
        }
    }

    pub(crate) fn invalid(section: &'static str) -> impl FnOnce(validator::ValidationErrors) -> Self {
        move |source| Self::Invalid { section, source }
    }
}
