//! Key-value persistence for progress records and the saved/recent lists.
//!
//! The [`KeyValueStore`] trait is the only way the rest of the crate touches
//! persisted state. Values are JSON strings; decoding happens at the
//! boundary in [`codec`], where every reader supplies its own fallback for
//! malformed data.
//!
//! | Key | Value |
//! |---|---|
//! | `lovelists_progress_<id>` | array of boolean |
//! | `lovelists_saved` | array of template ids |
//! | `lovelists_recent` | array of template ids, most recent first |

use crate::error::Result;

pub mod codec;
pub mod memory;
pub mod sqlite;

pub use codec::ParseError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key holding the saved-id set.
pub const SAVED_KEY: &str = "lovelists_saved";

/// Key holding the recent-id sequence.
pub const RECENT_KEY: &str = "lovelists_recent";

const PROGRESS_KEY_PREFIX: &str = "lovelists_progress_";

/// Key holding the progress record for one template.
pub fn progress_key(template_id: &str) -> String {
    format!("{PROGRESS_KEY_PREFIX}{template_id}")
}

/// A persistent string-keyed store of JSON-encoded values.
///
/// Like a browser's local storage, a store is a shared handle: writes go
/// through `&self`. Reads and writes are synchronous and not atomic with
/// respect to each other; two writers on the same backing store race with
/// last-write-wins.
pub trait KeyValueStore {
    /// Returns the raw value for `key`, or `None` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
