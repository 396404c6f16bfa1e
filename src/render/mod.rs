//! Page rendering.
//!
//! The compiler builds a [`CategoryPage`] for every category and asks a
//! [`PageRenderer`] to turn it into markup. The markup format is opaque to
//! the rest of the crate.

pub mod templates;

use thiserror::Error;

use crate::content::page::CategoryPage;

pub use templates::TemplateRenderer;

/// Errors from loading or executing page templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template source could not be loaded or parsed.
    #[error("could not load template {name:?}: {source}")]
    Load {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },

    /// The template failed while rendering a page.
    #[error("could not execute template: {0}")]
    Execute(#[from] minijinja::Error),
}

/// Turns a category page model into response bytes.
pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &CategoryPage) -> Result<String, RenderError>;
}
