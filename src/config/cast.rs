//! Casting raw string values into typed settings.

use std::fmt;
use std::time::Duration;

use axum::http::Uri;
use serde::Serialize;

use super::secret::Secret;

/// A type that can be read from a raw configuration string.
///
/// Returns `None` when the value is malformed; the caller turns that into a
/// coercion error naming the key.
pub trait Cast: Sized {
    fn cast(raw: &str) -> Option<Self>;
}

impl Cast for String {
    fn cast(raw: &str) -> Option<Self> {
        Some(raw.trim().to_string())
    }
}

impl Cast for Secret {
    fn cast(raw: &str) -> Option<Self> {
        Some(Secret::new(raw))
    }
}

/// A blank value reads as `false`, so `FLAG=` behaves like an unset flag.
impl Cast for bool {
    fn cast(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" | "" => Some(false),
            _ => None,
        }
    }
}

macro_rules! cast_integer {
    ($($ty:ty),*) => {
        $(
            impl Cast for $ty {
                fn cast(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

cast_integer!(u16, u32, u64, i64);

impl Cast for Duration {
    fn cast(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(raw.len());
        let (digits, unit) = raw.split_at(split);
        let value: u64 = digits.parse().ok()?;
        let scale = match unit.trim() {
            "" | "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            _ => return None,
        };
        value.checked_mul(scale).map(Duration::from_secs)
    }
}

impl Cast for Vec<String> {
    fn cast(raw: &str) -> Option<Self> {
        Some(
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Absolute URL with an `http` or `https` scheme and a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HttpUrl(String);

impl HttpUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Cast for HttpUrl {
    fn cast(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let uri: Uri = raw.parse().ok()?;
        match (uri.scheme_str(), uri.host()) {
            (Some("http" | "https"), Some(host)) if !host.is_empty() => {
                Some(Self(raw.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
