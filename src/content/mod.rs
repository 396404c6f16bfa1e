//! Content tree subsystem.
//!
//! # Data Flow
//! ```text
//! config.content (Item tree, deserialized by config::loader)
//!     → compiler.rs (depth-first walk from "/")
//!         → item.rs (classify node: Category | Link | malformed)
//!         → path.rs (canonical child paths)
//!         → page.rs (category page model)
//!         → render::PageRenderer (model → HTML)
//!     → routing::RouteTable (frozen, handed to the HTTP layer)
//! ```
//!
//! # Design Decisions
//! - Compiled once at startup, never reloaded
//! - Fail fast: the first invalid node aborts the whole compilation
//! - Pages are pre-rendered; no templating happens per request
//! - Paths are derived from names, never stored on items

pub mod compiler;
pub mod item;
pub mod page;
pub mod path;

pub use compiler::{compile, CompileError, Compiler, InvalidReason};
pub use item::{Category, Content, Item, Link, ShapeError};
pub use page::{CategoryPage, PageEntry};
pub use path::{child_path, ROOT_PATH};
