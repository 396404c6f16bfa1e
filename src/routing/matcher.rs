//! Request path matching.
//!
//! # Responsibilities
//! - Turn the request URI into the key used for table lookup
//! - Percent-decode the path so names with spaces or non-ASCII characters
//!   are reachable
//!
//! # Design Decisions
//! - Query strings are ignored
//! - A path that does not decode to UTF-8 is looked up as-is (and will miss)
//! - Path matching is case-sensitive

use std::borrow::Cow;

use axum::http::Uri;
use percent_encoding::percent_decode_str;

use crate::routing::router::{Handler, RouteTable};

/// Lookup key for a request URI.
pub fn request_path(uri: &Uri) -> Cow<'_, str> {
    let raw = uri.path();
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

/// Find the handler registered for `uri`, if any.
pub fn match_uri<'t>(table: &'t RouteTable, uri: &Uri) -> Option<&'t Handler> {
    table.get(&request_path(uri))
}
