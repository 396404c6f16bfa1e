//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Required top-level fields: host name, email, certificate directory
//! - Validate value ranges and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before the content tree is compiled
//! - Content tree checks live in content::compiler, not here

use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::config::schema::SiteConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingHostName,
    MissingEmail,
    MissingCertDir,
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    ZeroRequestTimeout,
    InvalidContentSecurityPolicy,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingHostName => write!(f, "host_name is required"),
            ValidationError::MissingEmail => write!(f, "email is required"),
            ValidationError::MissingCertDir => write!(f, "cert_dir is required"),
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address {:?} is not a socket address", addr)
            }
            ValidationError::ZeroRequestTimeout => write!(f, "timeouts.request_secs must be > 0"),
            ValidationError::InvalidContentSecurityPolicy => {
                write!(f, "security.content_security_policy is not a valid header value")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check everything about `config` except the content tree.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.host_name.is_empty() {
        errors.push(ValidationError::MissingHostName);
    }
    if config.email.is_empty() {
        errors.push(ValidationError::MissingEmail);
    }
    if config.cert_dir.is_empty() {
        errors.push(ValidationError::MissingCertDir);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.enable_headers
        && HeaderValue::from_str(&config.security.content_security_policy).is_err()
    {
        errors.push(ValidationError::InvalidContentSecurityPolicy);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
