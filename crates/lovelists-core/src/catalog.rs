//! The static, ordered catalog of list templates.

use std::{collections::HashMap, fs, ops::Index, path::Path};

use log::debug;

use crate::{
    category::normalize_category,
    error::{ListsError, Result},
    models::Template,
    query::compare_text,
};

/// Catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../assets/templates.json");

/// Immutable catalog of templates, loaded once at startup.
///
/// Keeps catalog order and an id index for lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `ListsError::DuplicateTemplate` if two templates share an id.
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(templates.len());
        for (position, template) in templates.iter().enumerate() {
            if positions.insert(template.id.clone(), position).is_some() {
                return Err(ListsError::DuplicateTemplate {
                    id: template.id.clone(),
                });
            }
        }
        Ok(Self {
            templates,
            positions,
        })
    }

    /// Parse a catalog from a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: Vec<Template> =
            serde_json::from_str(json).map_err(|source| ListsError::Catalog { source })?;
        Self::new(templates)
    }

    /// Read and parse a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| ListsError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.positions.get(id).map(|&i| &self.templates[i])
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<&Template> {
        self.get(id).ok_or_else(|| ListsError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Distinct tags across the catalog, deduplicated case-insensitively
    /// (first spelling wins) and sorted.
    pub fn tags(&self) -> Vec<String> {
        distinct_sorted(self.iter().flat_map(|t| t.tags.iter().cloned()))
    }

    /// Distinct normalized categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct_sorted(self.iter().map(|t| normalize_category(&t.category)))
    }
}

fn distinct_sorted<I: Iterator<Item = String>>(values: I) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for value in values {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s.to_lowercase() == value.to_lowercase()) {
            seen.push(value);
        }
    }
    seen.sort_by(|a, b| compare_text(a, b));
    seen
}

impl Index<usize> for Catalog {
    type Output = Template;

    fn index(&self, index: usize) -> &Self::Output {
        &self.templates[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CATALOG: &str = r#"[
        {"id": "declutter", "title": "Declutter", "category": "Home & Life Admin",
         "tags": ["home", "Cleaning"], "steps": ["a", "b"]},
        {"id": "wedding", "title": "Wedding Plan", "category": "Events",
         "tags": ["wedding", "HOME"], "steps": ["a"]},
        {"id": "misc", "title": "Misc", "category": "", "steps": []}
    ]"#;

    #[test]
    fn test_from_json_keeps_order_and_indexes_ids() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].id, "declutter");
        assert_eq!(catalog.get("wedding").map(|t| t.title.as_str()), Some("Wedding Plan"));
        assert!(catalog.get("nope").is_none());
        assert!(matches!(
            catalog.require("nope"),
            Err(ListsError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[{"id": "a", "title": "A"}, {"id": "a", "title": "Again"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, ListsError::DuplicateTemplate { id } if id == "a"));
    }

    #[test]
    fn test_invalid_json_is_a_catalog_error() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, ListsError::Catalog { .. }));
    }

    #[test]
    fn test_tags_are_distinct_and_sorted() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.tags(), vec!["Cleaning", "home", "wedding"]);
    }

    #[test]
    fn test_categories_are_normalized() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.categories(), vec!["Events", "Home", "Other"]);
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.len() >= 3);
        assert!(catalog.iter().all(|t| !t.steps.is_empty()));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ListsError::FileSystem { .. }));
    }
}
