//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → matcher.rs (decode request path into lookup key)
//!     → router.rs (exact lookup in RouteTable)
//!     → Return: Handler or NoMatch
//!
//! Route Compilation (at startup):
//!     content::Item tree
//!     → content::compiler walk
//!     → RouteTableBuilder (duplicate detection)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact match only: no prefix search, no slash normalization
//! - Deterministic: same config always yields the same table

pub mod matcher;
pub mod router;

pub use router::{DuplicateRoute, Handler, RouteTable, RouteTableBuilder, StaticPage};
