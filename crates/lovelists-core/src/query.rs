//! Catalog query engine: filtering, grouping and the featured strip.
//!
//! Everything here is a pure function of the catalog slice and a
//! [`CatalogQuery`]; nothing reads the store or mutates the catalog.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{
    category::{normalize_category, same_category},
    models::{CatalogQuery, CategoryGroup, Template},
};

/// How many leading catalog entries make up the featured strip.
pub const FEATURED_COUNT: usize = 3;

/// Collation used for titles and category names.
///
/// Primary key is the lowercased string with diacritics stripped, so
/// `Étude` sorts among the `e`s. Ties fall back to the lowercased original
/// (unaccented first), then to case with lowercase first. Fully equal
/// strings compare `Equal` so a stable sort keeps catalog order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Canonical decomposition with combining marks dropped, lowercased.
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Text the free-text filter searches, lowercased.
fn search_haystack(template: &Template) -> String {
    let category = normalize_category(&template.category);
    let tags = template.tags.join(" ");
    let good_for = template.good_for.join(" ");
    [
        template.title.as_str(),
        template.description.as_str(),
        category.as_str(),
        tags.as_str(),
        good_for.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Whether `template` passes all three filters of `query`.
pub fn matches(template: &Template, query: &CatalogQuery) -> bool {
    let text = query.text.trim();
    let text_ok = text.is_empty() || search_haystack(template).contains(&text.to_lowercase());

    let tag = query.tag.trim();
    let tag_ok = tag.is_empty() || template.has_tag(tag);

    let category = query.category.trim();
    let category_ok = category.is_empty() || same_category(&template.category, category);

    text_ok && tag_ok && category_ok
}

/// Filter `templates` by `query`, keeping catalog order.
pub fn query_catalog<'a>(templates: &'a [Template], query: &CatalogQuery) -> Vec<&'a Template> {
    templates.iter().filter(|t| matches(t, query)).collect()
}

/// Group templates by normalized category.
///
/// Groups are keyed case-insensitively and labelled with the first spelling
/// seen. Groups are sorted by name and members by title, both with
/// [`compare_text`]; ties keep their input order.
pub fn group_by_category<'a, I>(templates: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Template>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for template in templates {
        let category = template.display_category();
        let key = category.to_lowercase();
        match groups
            .iter_mut()
            .find(|g| g.category.to_lowercase() == key)
        {
            Some(group) => group.templates.push(template),
            None => groups.push(CategoryGroup {
                category,
                templates: vec![template],
            }),
        }
    }

    for group in &mut groups {
        group
            .templates
            .sort_by(|a, b| compare_text(&a.title, &b.title));
    }
    groups.sort_by(|a, b| compare_text(&a.category, &b.category));
    groups
}

/// The featured strip for the current query.
///
/// Without filters this is the first [`FEATURED_COUNT`] catalog entries.
/// With filters it is that prefix narrowed to matching entries, falling back
/// to the unfiltered prefix when nothing in it matches.
pub fn featured<'a>(templates: &'a [Template], query: &CatalogQuery) -> Vec<&'a Template> {
    let prefix = templates.iter().take(FEATURED_COUNT);
    if !query.is_active() {
        return prefix.collect();
    }

    let narrowed: Vec<&Template> = prefix.clone().filter(|t| matches(t, query)).collect();
    if narrowed.is_empty() {
        prefix.collect()
    } else {
        narrowed
    }
}
