//! Security response headers.
//!
//! # Responsibilities
//! - Add HSTS, frame, XSS, content-type and CSP headers to every response
//!
//! # Design Decisions
//! - Headers are set on the way out, overriding anything a handler set
//! - Header values are checked in config::validation; an invalid value here
//!   is logged and skipped rather than failing the server

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::SecurityConfig;

const HSTS: &str = "max-age=31536000; includeSubDomains; preload";

/// Headers to add for `config`, in a stable order.
pub fn security_headers(config: &SecurityConfig) -> Vec<(HeaderName, HeaderValue)> {
    if !config.enable_headers {
        return Vec::new();
    }

    let mut headers = Vec::with_capacity(5);
    if config.hsts {
        headers.push((header::STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS)));
    }
    headers.push((header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")));
    headers.push((header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")));
    headers.push((header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")));

    match HeaderValue::from_str(&config.content_security_policy) {
        Ok(csp) => headers.push((header::CONTENT_SECURITY_POLICY, csp)),
        Err(_) => tracing::warn!(
            policy = %config.content_security_policy,
            "Invalid Content-Security-Policy, header not sent"
        ),
    }

    headers
}

/// Wrap `router` so every response carries the configured headers.
pub fn apply(router: Router, config: &SecurityConfig) -> Router {
    security_headers(config)
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}
