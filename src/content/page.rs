//! Category page model.
//!
//! A category page lists its immediate children in two groups: sub-categories
//! first, then links. Within each group the declaration order is kept.

use serde::Serialize;

use crate::content::compiler::CompileError;
use crate::content::item::{Category, Content};
use crate::content::path::child_path;

/// One row on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Data handed to the page renderer for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub title: String,
    pub description: String,
    pub categories: Vec<PageEntry>,
    pub links: Vec<PageEntry>,
}

impl CategoryPage {
    /// Build the page model for `category`, located at `own_path`.
    ///
    /// Fails on the first child whose variant cannot be determined. The
    /// compiler visits every child first, so this only fires when a page is
    /// built outside of [`Compiler`](crate::content::Compiler).
    pub fn build(
        category: &Category,
        own_path: &str,
        own_description: &str,
    ) -> Result<Self, CompileError> {
        let mut categories = Vec::new();
        let mut links = Vec::new();

        for child in &category.items {
            let is_category = match child.content() {
                Ok(Content::Category(_)) => true,
                Ok(Content::Link(_)) => false,
                Err(_) if child.name.is_empty() => {
                    return Err(CompileError::MissingName {
                        parent: own_path.to_string(),
                    });
                }
                Err(shape) => {
                    return Err(CompileError::InvalidItem {
                        path: child_path(own_path, &child.name, false),
                        reason: shape.into(),
                    });
                }
            };

            let entry = PageEntry {
                name: child.name.clone(),
                url: child_path(own_path, &child.name, is_category),
                description: child.description.clone(),
            };
            if is_category {
                categories.push(entry);
            } else {
                links.push(entry);
            }
        }

        Ok(Self {
            title: category.title.clone(),
            description: own_description.to_string(),
            categories,
            links,
        })
    }
}
