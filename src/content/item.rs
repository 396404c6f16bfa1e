//! Content item model.
//!
//! Items are deserialized straight from the config file. Each item carries
//! its variant as one of two optional sub-tables; [`Item::content`] turns
//! that into a proper sum type so callers can match exhaustively.
//!
//! ```toml
//! [content]
//! description = "Things I visit"
//!
//! [content.category]
//! title = "Home"
//!
//! [[content.category.items]]
//! name = "go"
//! link = { url = "https://go.dev" }
//! ```

use serde::{Deserialize, Serialize};

/// One node of the declared content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Item {
    /// Path segment for this item. Empty for the root only.
    pub name: String,

    /// Free text shown next to the item on its parent's page.
    pub description: String,

    /// Set when the item is a category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Set when the item is a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// A browsable group of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Category {
    /// Page title.
    pub title: String,

    /// Children, in declaration order.
    pub items: Vec<Item>,
}

/// A redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Link {
    /// Target URL, used verbatim in the `Location` header.
    pub url: String,
}

/// Borrowed view of an item's populated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Category(&'a Category),
    Link(&'a Link),
}

/// An item whose variant cannot be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Neither `category` nor `link` is set.
    Empty,
    /// Both `category` and `link` are set.
    Ambiguous,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "no content"),
            ShapeError::Ambiguous => write!(f, "both category and link content"),
        }
    }
}

impl Item {
    /// Build a category item.
    pub fn category(name: impl Into<String>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            category: Some(Category {
                title: title.into(),
                items,
            }),
            ..Self::default()
        }
    }

    /// Build a link item.
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: Some(Link { url: url.into() }),
            ..Self::default()
        }
    }

    /// Set the description, builder style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Classify this item by its populated variant.
    pub fn content(&self) -> Result<Content<'_>, ShapeError> {
        match (&self.category, &self.link) {
            (Some(category), None) => Ok(Content::Category(category)),
            (None, Some(link)) => Ok(Content::Link(link)),
            (None, None) => Err(ShapeError::Empty),
            (Some(_), Some(_)) => Err(ShapeError::Ambiguous),
        }
    }

    /// True if this item is a well-formed category.
    pub fn is_category(&self) -> bool {
        matches!(self.content(), Ok(Content::Category(_)))
    }
}
