//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (HSTS, X-Frame-Options, CSP, ...)
//!     → client
//! ```
//!
//! # Design Decisions
//! - Same header set for every path, pages and redirects alike
//! - No trust in client input: paths are only ever looked up, never executed

pub mod headers;
