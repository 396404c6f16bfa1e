//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Emit one access log event per request
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level comes from config, `RUST_LOG` overrides it
//! - Client port is stripped from access logs; only the address is useful

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http::X_REQUEST_ID;

/// Default filter directives for `level`.
pub fn default_directives(level: &str) -> String {
    format!("linkdir={level},tower_http={level}")
}

/// Install the global tracing subscriber.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(level).into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Access log middleware. State is the listener name (`http` / `https`).
pub async fn access_log(
    State(listener): State<&'static str>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::info!(
        listener,
        client = %client,
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request"
    );

    next.run(request).await
}
