//! Route table and handler descriptors.
//!
//! # Responsibilities
//! - Store compiled routes keyed by canonical path
//! - Look up the handler for an exact path
//! - Reject a second registration for the same path
//!
//! # Design Decisions
//! - Immutable after `RouteTableBuilder::build` (shared via Arc, no locks)
//! - BTreeMap keeps iteration order stable across builds
//! - Static bodies are hashed once at build time for ETags

use std::collections::BTreeMap;

use axum::body::Bytes;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Content type of rendered category pages.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// A pre-built response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    body: Bytes,
    content_type: String,
    etag: String,
}

impl StaticPage {
    /// Wrap `body`, computing its strong ETag.
    pub fn new(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        let body = body.into();
        let digest = Sha256::digest(&body);
        Self {
            etag: format!("\"{}\"", URL_SAFE_NO_PAD.encode(digest)),
            body,
            content_type: content_type.into(),
        }
    }

    /// Shorthand for an HTML page.
    pub fn html(body: impl Into<Bytes>) -> Self {
        Self::new(body, HTML_CONTENT_TYPE)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Quoted entity tag, ready for the `ETag` header.
    pub fn etag(&self) -> &str {
        &self.etag
    }
}

/// What to do with a request for a registered path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Serve a pre-rendered body.
    StaticPage(StaticPage),
    /// Answer with 302 Found to `target`.
    Redirect { target: String },
}

impl Handler {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Handler::StaticPage(_) => "page",
            Handler::Redirect { .. } => "redirect",
        }
    }
}

/// A path was registered twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate route for path {0:?}")]
pub struct DuplicateRoute(pub String);

/// Accumulates routes before freezing them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: BTreeMap<String, Handler>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` at `path`.
    pub fn insert(&mut self, path: impl Into<String>, handler: Handler) -> Result<(), DuplicateRoute> {
        let path = path.into();
        if self.routes.contains_key(&path) {
            return Err(DuplicateRoute(path));
        }
        self.routes.insert(path, handler);
        Ok(())
    }

    /// Number of routes registered so far.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freeze the table.
    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}

/// Immutable mapping from canonical path to handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, Handler>,
}

impl RouteTable {
    /// Exact-match lookup.
    pub fn get(&self, path: &str) -> Option<&Handler> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handler)> {
        self.routes.iter().map(|(path, handler)| (path.as_str(), handler))
    }
}
