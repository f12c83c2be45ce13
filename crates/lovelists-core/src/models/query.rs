//! Query and grouped-view types for browsing the catalog.

use serde::{Deserialize, Serialize};

use super::Template;

/// The free-text, tag and category filters currently applied.
///
/// An empty (or blank) field means "no filter" for that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring searched across a template's text fields
    #[serde(default)]
    pub text: String,

    /// Exact (case-insensitive) tag to require
    #[serde(default)]
    pub tag: String,

    /// Category to require, compared after normalization
    #[serde(default)]
    pub category: String,
}

impl CatalogQuery {
    /// Query with only the free-text filter set.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Query with only the tag filter set.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Query with only the category filter set.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    /// Whether any of the three filters is set.
    pub fn is_active(&self) -> bool {
        !self.text.trim().is_empty()
            || !self.tag.trim().is_empty()
            || !self.category.trim().is_empty()
    }
}

/// Templates sharing one normalized category, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// Normalized category name
    pub category: String,
    /// Members sorted by title
    pub templates: Vec<&'a Template>,
}
