//! Content tree compilation.
//!
//! # Responsibilities
//! - Validate every item name (root unnamed, others named, no `/`, no dot segments)
//! - Dispatch on the item variant; reject items with zero or two variants
//! - Pre-render category pages and register them as static routes
//! - Register links as redirects
//!
//! # Design Decisions
//! - Depth-first, pre-order; children visited in declaration order
//! - Errors surface in walk order: a category's page is rendered only after
//!   its whole subtree compiled
//! - Fail fast: the first error aborts and nothing is returned
//! - Duplicate paths are an error, not last-one-wins

use thiserror::Error;

use crate::content::item::{Content, Item, ShapeError};
use crate::content::page::CategoryPage;
use crate::content::path::{child_path, ROOT_PATH, SEPARATOR};
use crate::render::{PageRenderer, RenderError};
use crate::routing::router::{DuplicateRoute, Handler, RouteTable, RouteTableBuilder, StaticPage};

/// Why an individual item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The name contains the path separator.
    Separator,
    /// The name is `.` or `..`.
    DotSegment,
    /// A link with an empty URL.
    MissingUrl,
    /// Neither `category` nor `link` is set.
    NoContent,
    /// Both `category` and `link` are set.
    AmbiguousContent,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Separator => write!(f, "item name contains a slash"),
            InvalidReason::DotSegment => write!(f, "item name is a dot segment"),
            InvalidReason::MissingUrl => write!(f, "missing url"),
            InvalidReason::NoContent => write!(f, "no content"),
            InvalidReason::AmbiguousContent => write!(f, "unexpected content: both category and link"),
        }
    }
}

impl From<ShapeError> for InvalidReason {
    fn from(shape: ShapeError) -> Self {
        match shape {
            ShapeError::Empty => InvalidReason::NoContent,
            ShapeError::Ambiguous => InvalidReason::AmbiguousContent,
        }
    }
}

/// Errors that abort compilation of the content tree.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The root item carries a name.
    #[error("root item has a name ({0:?})")]
    NamedRoot(String),

    /// A non-root item has an empty name.
    #[error("item under {parent:?} has no name")]
    MissingName { parent: String },

    /// An item failed validation.
    #[error("item {path:?} invalid: {reason}")]
    InvalidItem { path: String, reason: InvalidReason },

    /// Two items resolve to the same canonical path.
    #[error(transparent)]
    DuplicatePath(#[from] DuplicateRoute),

    /// A category page could not be rendered.
    #[error("could not render category {path:?}: {source}")]
    Render {
        path: String,
        #[source]
        source: RenderError,
    },
}

/// Walks a content tree and assembles its route table.
pub struct Compiler<'r> {
    renderer: &'r dyn PageRenderer,
    routes: RouteTableBuilder,
}

impl<'r> Compiler<'r> {
    /// Create a compiler starting from an empty table.
    pub fn new(renderer: &'r dyn PageRenderer) -> Self {
        Self::with_routes(renderer, RouteTableBuilder::new())
    }

    /// Create a compiler whose table already holds `routes`.
    ///
    /// Content items that collide with a pre-registered path fail with
    /// [`CompileError::DuplicatePath`].
    pub fn with_routes(renderer: &'r dyn PageRenderer, routes: RouteTableBuilder) -> Self {
        Self { renderer, routes }
    }

    /// Compile the tree rooted at `root`.
    pub fn compile(mut self, root: &Item) -> Result<RouteTable, CompileError> {
        if !root.name.is_empty() {
            return Err(CompileError::NamedRoot(root.name.clone()));
        }
        self.visit(ROOT_PATH, root)?;
        Ok(self.routes.build())
    }

    fn visit(&mut self, path: &str, item: &Item) -> Result<(), CompileError> {
        let content = item.content().map_err(|shape| CompileError::InvalidItem {
            path: path.to_string(),
            reason: shape.into(),
        })?;

        match content {
            Content::Category(category) => {
                for child in &category.items {
                    validate_name(path, child)?;
                    let child_path = child_path(path, &child.name, child.is_category());
                    self.visit(&child_path, child)?;
                }

                let page = CategoryPage::build(category, path, &item.description)?;
                let html = self
                    .renderer
                    .render(&page)
                    .map_err(|source| CompileError::Render {
                        path: path.to_string(),
                        source,
                    })?;
                self.routes
                    .insert(path, Handler::StaticPage(StaticPage::html(html)))?;
            }
            Content::Link(link) => {
                if link.url.is_empty() {
                    return Err(CompileError::InvalidItem {
                        path: path.to_string(),
                        reason: InvalidReason::MissingUrl,
                    });
                }
                self.routes.insert(
                    path,
                    Handler::Redirect {
                        target: link.url.clone(),
                    },
                )?;
            }
        }

        tracing::trace!(path = %path, "Compiled item");
        Ok(())
    }
}

/// Check a non-root item's name before its path is computed.
fn validate_name(parent: &str, item: &Item) -> Result<(), CompileError> {
    let invalid = |reason| CompileError::InvalidItem {
        path: format!("{parent}{}", item.name),
        reason,
    };

    if item.name.is_empty() {
        return Err(CompileError::MissingName {
            parent: parent.to_string(),
        });
    }
    if item.name.contains(SEPARATOR) {
        return Err(invalid(InvalidReason::Separator));
    }
    if item.name == "." || item.name == ".." {
        return Err(invalid(InvalidReason::DotSegment));
    }
    Ok(())
}

/// Compile `root` into a fresh route table.
pub fn compile(root: &Item, renderer: &dyn PageRenderer) -> Result<RouteTable, CompileError> {
    Compiler::new(renderer).compile(root)
}
