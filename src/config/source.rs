//! Raw value sources and their layering.

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use config::Config;

use super::cast::Cast;
use super::error::SettingsError;
use super::keys::{self, Key};

/// Abstraction over environment variable sources.
///
/// Lets resolution run against a fixed map without touching the process
/// environment.
pub trait EnvSource {
    /// Value of the variable, or `None` when unset or not valid unicode.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnv;

impl EnvSource for StdEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Variables parsed from a local env file.
///
/// The file is read once and closed; nothing is exported into the process
/// environment.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Parse `path`. A missing file yields an empty set.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "env file not found, skipping");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::EnvFile {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut vars = HashMap::new();
        for item in iter {
            let (name, value) = item.map_err(|source| SettingsError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            // Later assignments win, as they would when sourced by a shell.
            vars.insert(name, value);
        }

        tracing::debug!(path = %path.display(), count = vars.len(), "env file loaded");
        Ok(Self {
            path: Some(path.to_path_buf()),
            vars,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Layer a key's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Env,
    EnvFile,
    Default,
    Unset,
}

/// Declared keys merged across env, env file and defaults.
#[derive(Debug)]
pub struct LayeredSource {
    layers: Config,
    origins: BTreeMap<&'static str, Origin>,
}

impl LayeredSource {
    /// Merge every declared key.
    ///
    /// Precedence: process env, then env file, then the declared default.
    pub fn build(env: &impl EnvSource, file: &EnvFile) -> Result<Self, SettingsError> {
        Self::build_for(keys::ALL, env, file)
    }

    pub fn build_for(
        declared: &[Key],
        env: &impl EnvSource,
        file: &EnvFile,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        let mut origins = BTreeMap::new();

        for key in declared {
            let path = key.path();
            let from_env = env.get(key.name);
            let from_file = file.get(key.name);

            let origin = match (&from_env, &from_file, key.default_value()) {
                (Some(_), _, _) => Origin::Env,
                (None, Some(_), _) => Origin::EnvFile,
                (None, None, Some(_)) => Origin::Default,
                (None, None, None) => Origin::Unset,
            };

            if let Some(default) = key.default_value() {
                builder = builder.set_default(&path, default)?;
            }
            builder = builder
                .set_override_option(&path, from_file)?
                .set_override_option(&path, from_env)?;

            match origin {
                Origin::Default if key.secret => {
                    tracing::debug!(key = key.name, "not set, using default");
                }
                Origin::Default => {
                    tracing::debug!(
                        key = key.name,
                        default = key.default_value().unwrap_or_default(),
                        "not set, using default"
                    );
                }
                Origin::Unset if !key.is_required() => {
                    tracing::debug!(key = key.name, "not set");
                }
                _ => tracing::trace!(key = key.name, ?origin, "resolved"),
            }

            origins.insert(key.name, origin);
        }

        Ok(Self {
            layers: builder.build()?,
            origins,
        })
    }

    /// Where the value for `key` came from.
    pub fn origin(&self, key: &Key) -> Origin {
        self.origins.get(key.name).copied().unwrap_or(Origin::Unset)
    }

    /// Keys that fell back to their declared default.
    pub fn defaulted(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.origins
            .iter()
            .filter(|(_, origin)| **origin == Origin::Default)
            .map(|(name, _)| *name)
    }

    fn raw(&self, key: &Key) -> Result<Option<String>, SettingsError> {
        match self.layers.get_string(&key.path()) {
            Ok(value) => Ok(Some(value)),
            Err(config::ConfigError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Typed value of `key`, `None` when no layer provides one.
    pub fn get<T: Cast>(&self, key: &Key) -> Result<Option<T>, SettingsError> {
        self.raw(key)?
            .map(|raw| T::cast(&raw).ok_or_else(|| SettingsError::type_coercion(key, &raw)))
            .transpose()
    }

    /// Like [`get`](Self::get), but a blank value counts as unset.
    pub fn optional<T: Cast>(&self, key: &Key) -> Result<Option<T>, SettingsError> {
        self.raw(key)?
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| T::cast(&raw).ok_or_else(|| SettingsError::type_coercion(key, &raw)))
            .transpose()
    }

    /// Typed value of a required or defaulted key.
    pub fn require<T: Cast>(&self, key: &Key) -> Result<T, SettingsError> {
        self.get(key)?
            .ok_or(SettingsError::MissingRequired { key: key.name })
    }
}
