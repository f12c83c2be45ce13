//! Step-completion tracking for a single list.
//!
//! A progress record is a `Vec<bool>` indexed like the template's `steps`.
//! The stored copy can be older than the catalog, so every read goes through
//! [`reconcile`], which pads or truncates it to the current step count.
//!
//! The pure operations ([`toggle_step`], [`reset`], [`compute_stats`]) never
//! touch the store; [`ProgressTracker`] adds the load/save pair on top of an
//! injected [`KeyValueStore`].

use log::debug;
use serde_json::Value;

use crate::{
    error::Result,
    models::{ProgressStats, Template},
    store::{codec, progress_key, KeyValueStore},
};

/// Resize a stored record to `len` entries.
///
/// Index `i` is `true` iff the stored array holds a truthy value there.
/// Missing indices default to `false` and entries past `len` are dropped.
pub fn reconcile(stored: &[Value], len: usize) -> Vec<bool> {
    (0..len)
        .map(|i| stored.get(i).is_some_and(is_truthy))
        .collect()
}

/// JSON truthiness: `false`, `null`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return a copy of `progress` with `index` flipped.
///
/// `index` must be below `progress.len()`; an out-of-range index leaves the
/// copy unchanged.
pub fn toggle_step(progress: &[bool], index: usize) -> Vec<bool> {
    debug_assert!(index < progress.len(), "step index {index} out of range");
    let mut toggled = progress.to_vec();
    if let Some(step) = toggled.get_mut(index) {
        *step = !*step;
    }
    toggled
}

/// A fresh, all-unchecked record for `template`.
pub fn reset(template: &Template) -> Vec<bool> {
    vec![false; template.step_count()]
}

/// Summarize a record: checked count, step count and rounded percentage.
///
/// Rounds half up, and a list with no steps is 0%.
pub fn compute_stats(progress: &[bool], total_steps: usize) -> ProgressStats {
    let done = progress.iter().filter(|&&checked| checked).count();
    let pct = if total_steps == 0 {
        0
    } else {
        ((done * 200 + total_steps) / (total_steps * 2)).min(100) as u8
    };
    ProgressStats {
        done,
        total: total_steps,
        pct,
    }
}

/// Loads and saves progress records through a [`KeyValueStore`].
pub struct ProgressTracker<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the record for `template`, shaped to its current step count.
    ///
    /// A missing or malformed record (not JSON, or not an array) reads as
    /// all-unchecked.
    ///
    /// # Errors
    ///
    /// Returns `ListsError::Database` only if the backing store itself fails.
    pub fn load_progress(&self, template: &Template) -> Result<Vec<bool>> {
        let key = progress_key(&template.id);
        let raw = self.store.get(&key)?;
        let stored: Vec<Value> = codec::decode_or_else(&key, raw.as_deref(), Vec::new);
        Ok(reconcile(&stored, template.step_count()))
    }

    /// Overwrite the stored record for `template_id` with `progress`.
    pub fn save_progress(&self, template_id: &str, progress: &[bool]) -> Result<()> {
        debug!("Saving progress for '{template_id}'");
        self.store
            .set(&progress_key(template_id), &codec::encode(progress)?)
    }

    /// Current stats for `template` as stored.
    pub fn stats(&self, template: &Template) -> Result<ProgressStats> {
        let progress = self.load_progress(template)?;
        Ok(compute_stats(&progress, template.step_count()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;

    fn template_with_steps(id: &str, count: usize) -> Template {
        Template {
            id: id.to_string(),
            title: format!("List {id}"),
            description: String::new(),
            category: String::new(),
            tags: vec![],
            time_mins: 0,
            difficulty: None,
            good_for: vec![],
            steps: (1..=count).map(|i| format!("Step {i}")).collect(),
        }
    }

    #[test]
    fn test_reconcile_pads_short_records() {
        let stored = vec![json!(true), json!(false)];
        assert_eq!(reconcile(&stored, 4), vec![true, false, false, false]);
    }

    #[test]
    fn test_reconcile_truncates_long_records() {
        let stored = vec![json!(true), json!(true), json!(true)];
        assert_eq!(reconcile(&stored, 2), vec![true, true]);
    }

    #[test]
    fn test_reconcile_uses_truthiness() {
        let stored = vec![
            json!(1),
            json!(0),
            json!("x"),
            json!(""),
            json!(null),
            json!([]),
            json!({}),
            json!(false),
        ];
        assert_eq!(
            reconcile(&stored, 8),
            vec![true, false, true, false, false, true, true, false]
        );
    }

    #[test]
    fn test_toggle_step_is_involutive() {
        let original = vec![false, true, false];
        for i in 0..original.len() {
            let once = toggle_step(&original, i);
            assert_ne!(once, original);
            assert_eq!(toggle_step(&once, i), original);
        }
    }

    #[test]
    fn test_reset_matches_step_count() {
        assert_eq!(reset(&template_with_steps("a", 3)), vec![false; 3]);
        assert!(reset(&template_with_steps("b", 0)).is_empty());
    }

    #[test]
    fn test_compute_stats_rounds_half_up() {
        let stats = compute_stats(&[true, false, false, false, false, false, false, false], 8);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.total, 8);
        // 12.5% rounds up
        assert_eq!(stats.pct, 13);

        assert_eq!(compute_stats(&[true, false, false], 3).pct, 33);
        assert_eq!(compute_stats(&[true, true, false], 3).pct, 67);
        assert_eq!(compute_stats(&[true, true], 2).pct, 100);
    }

    #[test]
    fn test_compute_stats_empty_list_is_zero() {
        let stats = compute_stats(&[], 0);
        assert_eq!(stats, ProgressStats::default());
    }

    #[test]
    fn test_load_missing_record_is_all_false() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::new(&store);
        let progress = tracker.load_progress(&template_with_steps("a", 3)).unwrap();
        assert_eq!(progress, vec![false; 3]);
    }

    #[test]
    fn test_load_malformed_record_is_all_false() {
        let store = MemoryStore::new();
        store.set("lovelists_progress_a", "not-json").unwrap();
        store.set("lovelists_progress_b", "{\"0\": true}").unwrap();
        let tracker = ProgressTracker::new(&store);

        assert_eq!(
            tracker.load_progress(&template_with_steps("a", 2)).unwrap(),
            vec![false, false]
        );
        assert_eq!(
            tracker.load_progress(&template_with_steps("b", 2)).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_save_then_load_after_steps_change() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::new(&store);
        tracker
            .save_progress("a", &[true, false, true, true])
            .unwrap();
        assert_eq!(
            store.get("lovelists_progress_a").unwrap(),
            Some("[true,false,true,true]".to_string())
        );

        // The catalog dropped a step since the record was written
        let shorter = template_with_steps("a", 3);
        assert_eq!(
            tracker.load_progress(&shorter).unwrap(),
            vec![true, false, true]
        );

        // ...and later grew two
        let longer = template_with_steps("a", 6);
        assert_eq!(
            tracker.load_progress(&longer).unwrap(),
            vec![true, false, true, true, false, false]
        );
    }

    #[test]
    fn test_stats_reads_through_store() {
        let store = MemoryStore::new();
        let tracker = ProgressTracker::new(&store);
        tracker.save_progress("a", &[true, true, false, false]).unwrap();

        let stats = tracker.stats(&template_with_steps("a", 4)).unwrap();
        assert_eq!((stats.done, stats.total, stats.pct), (2, 4, 50));
    }
}
