//! High-level API the presentation layer drives.
//!
//! [`Lists`] owns the [`Catalog`] and a [`KeyValueStore`] and wires the
//! pure pieces together:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │      Lists      │    │ ProgressTracker │    │  KeyValueStore  │
//! │  (open, check,  │───▶│    Registry     │───▶│ (SQLite, memory)│
//! │  browse, save)  │    │  query engine   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutation is written through to the store before the call returns,
//! so the next command (or the next process) reads what this one wrote.
//!
//! # Examples
//!
//! ```rust
//! use lovelists_core::{params::ToggleStep, Catalog, Lists, MemoryStore};
//!
//! # fn example() -> Result<(), lovelists_core::ListsError> {
//! let catalog = Catalog::from_json(
//!     r#"[{"id": "date-night", "title": "Date Night", "steps": ["Pick", "Book"]}]"#,
//! )?;
//! let mut lists = Lists::new(catalog, MemoryStore::new());
//!
//! lists.open_list("date-night")?;
//! let checklist = lists.toggle_step(&ToggleStep {
//!     id: "date-night".to_string(),
//!     index: 0,
//! })?;
//! assert_eq!(checklist.stats.pct, 50);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::BTreeSet;

use log::info;

use crate::{
    catalog::Catalog,
    display::{Card, CardGroup, Cards, Checklist, GroupedCards},
    error::{ListsError, Result},
    models::{CatalogQuery, ProgressStats, Template},
    params::ToggleStep,
    progress::{self, ProgressTracker},
    query,
    registry::{self, Registry},
    store::KeyValueStore,
};

pub mod builder;


pub use builder::ListsBuilder;

/// Catalog plus persisted per-user state.
#[derive(Debug)]
pub struct Lists<S> {
    catalog: Catalog,
    store: S,
}

impl<S: KeyValueStore> Lists<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn tracker(&self) -> ProgressTracker<&S> {
        ProgressTracker::new(&self.store)
    }

    fn registry(&self) -> Registry<&S> {
        Registry::new(&self.store)
    }

    fn cards<'a, I>(&'a self, templates: I) -> Result<Cards<'a>>
    where
        I: IntoIterator<Item = &'a Template>,
    {
        let saved = self.registry().saved_ids()?;
        let tracker = self.tracker();
        let cards = templates
            .into_iter()
            .map(|template| {
                Ok(Card {
                    template,
                    stats: tracker.stats(template)?,
                    saved: saved.contains(&template.id),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Cards(cards))
    }

    fn checklist<'a>(
        &'a self,
        template: &'a Template,
        progress: Vec<bool>,
    ) -> Result<Checklist<'a>> {
        Ok(Checklist {
            template,
            stats: progress::compute_stats(&progress, template.step_count()),
            progress,
            saved: self.registry().is_saved(&template.id)?,
        })
    }

    /// Matching lists in catalog order.
    pub fn search(&self, query: &CatalogQuery) -> Result<Cards<'_>> {
        self.cards(query::query_catalog(self.catalog.templates(), query))
    }

    /// Matching lists grouped by category.
    pub fn browse(&self, query: &CatalogQuery) -> Result<GroupedCards<'_>> {
        let filtered = query::query_catalog(self.catalog.templates(), query);
        let groups = query::group_by_category(filtered)
            .into_iter()
            .map(|group| {
                Ok(CardGroup {
                    category: group.category,
                    cards: self.cards(group.templates)?.0,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(GroupedCards(groups))
    }

    /// The featured strip for `query`.
    pub fn featured(&self, query: &CatalogQuery) -> Result<Cards<'_>> {
        self.cards(query::featured(self.catalog.templates(), query))
    }

    /// A list with its stored progress, without touching the recent
    /// sequence.
    pub fn show(&self, id: &str) -> Result<Checklist<'_>> {
        let template = self.catalog.require(id)?;
        let progress = self.tracker().load_progress(template)?;
        self.checklist(template, progress)
    }

    /// Open a list: record it as most recent and return its checklist.
    pub fn open_list(&mut self, id: &str) -> Result<Checklist<'_>> {
        let template = self.catalog.require(id)?;
        self.registry().add_recent(&template.id)?;
        info!("Opened list '{id}'");
        let progress = self.tracker().load_progress(template)?;
        self.checklist(template, progress)
    }

    /// Flip one step and persist the whole record.
    ///
    /// # Errors
    ///
    /// Returns `ListsError::InvalidInput` if `params.index` is not a step of
    /// the list.
    pub fn toggle_step(&mut self, params: &ToggleStep) -> Result<Checklist<'_>> {
        let template = self.catalog.require(&params.id)?;
        if params.index >= template.step_count() {
            return Err(ListsError::invalid_input("step").with_reason(format!(
                "list '{}' has {} steps, index {} is out of range",
                template.id,
                template.step_count(),
                params.index
            )));
        }

        let tracker = self.tracker();
        let current = tracker.load_progress(template)?;
        let toggled = progress::toggle_step(&current, params.index);
        tracker.save_progress(&template.id, &toggled)?;
        self.checklist(template, toggled)
    }

    /// Uncheck every step and persist the empty record.
    pub fn reset_list(&mut self, id: &str) -> Result<Checklist<'_>> {
        let template = self.catalog.require(id)?;
        let fresh = progress::reset(template);
        self.tracker().save_progress(&template.id, &fresh)?;
        info!("Reset list '{id}'");
        self.checklist(template, fresh)
    }

    /// Stored stats for one list.
    pub fn stats(&self, id: &str) -> Result<ProgressStats> {
        let template = self.catalog.require(id)?;
        self.tracker().stats(template)
    }

    /// Flip saved membership. Returns whether the list is saved afterwards.
    pub fn toggle_saved(&mut self, id: &str) -> Result<bool> {
        let template = self.catalog.require(id)?;
        self.registry().toggle_saved(&template.id)
    }

    pub fn is_saved(&self, id: &str) -> Result<bool> {
        self.registry().is_saved(id)
    }

    /// Saved lists in catalog order.
    pub fn saved_lists(&self) -> Result<Cards<'_>> {
        let saved: BTreeSet<String> = self.registry().saved_ids()?;
        self.cards(registry::resolve_saved_lists(&self.catalog, &saved))
    }

    /// Recently opened lists, most recent first.
    pub fn recent_lists(&self) -> Result<Cards<'_>> {
        let recent = self.registry().recent_ids()?;
        self.cards(registry::resolve_recent_lists(&self.catalog, &recent))
    }
}
