//! Saved set and recent sequence, both keyed by template id.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    catalog::Catalog,
    error::Result,
    models::Template,
    store::{codec, KeyValueStore, RECENT_KEY, SAVED_KEY},
};

/// Longest the recent sequence may grow.
pub const RECENT_MAX: usize = 8;

/// Put `id` at the front of `recent`, dropping any older occurrence and
/// anything past [`RECENT_MAX`].
pub fn push_recent(recent: &[String], id: &str) -> Vec<String> {
    std::iter::once(id.to_string())
        .chain(recent.iter().filter(|r| r.as_str() != id).cloned())
        .take(RECENT_MAX)
        .collect()
}

/// Saved templates in catalog order.
pub fn resolve_saved_lists<'a>(catalog: &'a Catalog, saved: &BTreeSet<String>) -> Vec<&'a Template> {
    catalog.iter().filter(|t| saved.contains(&t.id)).collect()
}

/// Recent templates in recency order. Ids no longer in the catalog are
/// skipped.
pub fn resolve_recent_lists<'a>(catalog: &'a Catalog, recent: &[String]) -> Vec<&'a Template> {
    recent
        .iter()
        .filter_map(|id| catalog.get(id))
        .take(RECENT_MAX)
        .collect()
}

/// Reads and writes the saved set and recent sequence.
///
/// Stored values that are not arrays of strings read as empty.
pub struct Registry<S> {
    store: S,
}

impl<S: KeyValueStore> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_ids(&self, key: &str) -> Result<Vec<String>> {
        let raw = self.store.get(key)?;
        Ok(codec::decode_or_else(key, raw.as_deref(), Vec::new))
    }

    /// The saved set.
    pub fn saved_ids(&self) -> Result<BTreeSet<String>> {
        Ok(self.read_ids(SAVED_KEY)?.into_iter().collect())
    }

    pub fn is_saved(&self, id: &str) -> Result<bool> {
        Ok(self.saved_ids()?.contains(id))
    }

    /// Flip membership of `id` and write the set back. Returns whether `id`
    /// is saved afterwards.
    pub fn toggle_saved(&self, id: &str) -> Result<bool> {
        let mut saved = self.saved_ids()?;
        let now_saved = if saved.remove(id) {
            false
        } else {
            saved.insert(id.to_string());
            true
        };
        debug!("Toggled saved '{id}' -> {now_saved}");

        let ids: Vec<&String> = saved.iter().collect();
        self.store.set(SAVED_KEY, &codec::encode(&ids)?)?;
        Ok(now_saved)
    }

    /// The recent sequence, most recent first.
    ///
    /// A hand-edited record with repeats or extra entries is cleaned up on
    /// read so the bound and uniqueness always hold for callers.
    pub fn recent_ids(&self) -> Result<Vec<String>> {
        let mut recent = Vec::new();
        for id in self.read_ids(RECENT_KEY)? {
            if !recent.contains(&id) {
                recent.push(id);
            }
        }
        recent.truncate(RECENT_MAX);
        Ok(recent)
    }

    /// Record that `id` was just opened and write the sequence back.
    pub fn add_recent(&self, id: &str) -> Result<Vec<String>> {
        let recent = push_recent(&self.recent_ids()?, id);
        self.store.set(RECENT_KEY, &codec::encode(&recent)?)?;
        Ok(recent)
    }
}
