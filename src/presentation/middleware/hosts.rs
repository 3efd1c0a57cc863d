//! Allowed Hosts Middleware
//!
//! Rejects requests whose `Host` header does not match the configured host
//! patterns. A pattern is an exact host, `*`, or `.example.com` to match a
//! domain and all of its subdomains.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};

use crate::config::SecuritySettings;
use crate::shared::error::AppError;

/// Host patterns accepted by [`enforce_allowed_hosts`].
#[derive(Debug, Clone)]
pub struct AllowedHosts(Arc<[String]>);

impl AllowedHosts {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns.into_iter().map(|p| p.to_ascii_lowercase()).collect())
    }

    pub fn from_settings(settings: &SecuritySettings) -> Self {
        Self::new(settings.effective_allowed_hosts())
    }

    /// Whether a raw `Host` header value is accepted.
    pub fn allows(&self, host: &str) -> bool {
        let Some(domain) = domain_of(host) else {
            return false;
        };
        self.0.iter().any(|pattern| matches_pattern(pattern, &domain))
    }
}

/// Lowercased host without port or trailing dot. `None` if malformed.
fn domain_of(host: &str) -> Option<String> {
    let host = host.trim().to_ascii_lowercase();
    let domain = if host.starts_with('[') {
        let end = host.find(']')?;
        &host[..=end]
    } else {
        host.rsplit_once(':').map_or(host.as_str(), |(domain, _port)| domain)
    };
    let domain = domain.trim_end_matches('.');
    (!domain.is_empty()).then(|| domain.to_string())
}

fn matches_pattern(pattern: &str, domain: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_prefix('.') {
        Some(parent) => domain == parent || domain.ends_with(pattern),
        None => domain == pattern,
    }
}

/// Reject requests addressed to a host outside the allowed list.
pub async fn enforce_allowed_hosts(
    State(allowed): State<AllowedHosts>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest("Missing Host header".into()))?;

    if !allowed.allows(&host) {
        tracing::warn!(%host, "Rejected request for disallowed host");
        return Err(AppError::BadRequest(format!("Invalid Host header: {host}")));
    }

    Ok(next.run(request).await)
}
