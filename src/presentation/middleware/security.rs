//! Security Headers Middleware
//!
//! Adds the response headers derived from the security settings: MIME
//! sniffing and framing protection, referrer policy, the cross-origin opener
//! policy and, when enabled, HSTS.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Request, Response},
};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::config::{CrossOriginOpenerPolicy, SecuritySettings};

const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// Security headers configuration
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    /// HSTS max-age in seconds; zero disables the header
    pub hsts_seconds: u64,
    /// Include subdomains in HSTS
    pub hsts_include_subdomains: bool,
    pub cross_origin_opener_policy: CrossOriginOpenerPolicy,
    /// Referrer-Policy value
    pub referrer_policy: &'static str,
}

impl From<&SecuritySettings> for SecurityHeadersConfig {
    fn from(settings: &SecuritySettings) -> Self {
        Self {
            hsts_seconds: settings.hsts_seconds,
            hsts_include_subdomains: settings.hsts_include_subdomains,
            cross_origin_opener_policy: settings.cross_origin_opener_policy,
            referrer_policy: "same-origin",
        }
    }
}

/// Layer that adds security headers to responses
#[derive(Clone)]
pub struct SecurityHeadersLayer {
    config: SecurityHeadersConfig,
}

impl SecurityHeadersLayer {
    pub fn from_settings(settings: &SecuritySettings) -> Self {
        Self::with_config(settings.into())
    }

    /// Create a security headers layer with custom configuration
    pub fn with_config(config: SecurityHeadersConfig) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersMiddleware {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Middleware service that adds security headers
#[derive(Clone)]
pub struct SecurityHeadersMiddleware<S> {
    inner: S,
    config: SecurityHeadersConfig,
}

impl<S> Service<Request<Body>> for SecurityHeadersMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let config = self.config.clone();

        Box::pin(async move {
            let mut response = inner.call(request).await?;
            let headers = response.headers_mut();

            headers.insert(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            );
            headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
            headers.insert(
                header::REFERRER_POLICY,
                HeaderValue::from_static(config.referrer_policy),
            );
            headers.insert(
                CROSS_ORIGIN_OPENER_POLICY,
                HeaderValue::from_static(config.cross_origin_opener_policy.as_str()),
            );

            if config.hsts_seconds > 0 {
                let hsts_value = if config.hsts_include_subdomains {
                    format!("max-age={}; includeSubDomains", config.hsts_seconds)
                } else {
                    format!("max-age={}", config.hsts_seconds)
                };
                if let Ok(value) = HeaderValue::from_str(&hsts_value) {
                    headers.insert(header::STRICT_TRANSPORT_SECURITY, value);
                }
            }

            Ok(response)
        })
    }
}
