//! Core library for Love Lists, a browser for planning checklists.
//!
//! The crate sits between a static catalog of list templates and whatever
//! presents them. It provides:
//!
//! - the catalog query engine ([`query`]): free-text, tag and category
//!   filters, grouping by category and the featured strip,
//! - saved/recent bookkeeping ([`registry`]),
//! - per-list step progress with shape reconciliation ([`progress`]),
//! - a [`KeyValueStore`] seam with SQLite and in-memory backends
//!   ([`store`]),
//! - markdown views of all of the above ([`display`]).
//!
//! [`Lists`] ties these together for a presentation layer.
//!
//! # Quick Start
//!
//! ```rust
//! use lovelists_core::{CatalogQuery, Lists, ListsBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut lists = ListsBuilder::new()
//!     .with_database_path(Some(dir.path().join("lovelists.db")))
//!     .build()?;
//!
//! let grouped = lists.browse(&CatalogQuery::text("wedding"))?;
//! println!("{grouped}");
//!
//! let first = lists.catalog()[0].id.clone();
//! let checklist = lists.open_list(&first)?;
//! println!("{checklist}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod category;
pub mod display;
pub mod error;
pub mod lists;
pub mod models;
pub mod params;
pub mod progress;
pub mod query;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use catalog::Catalog;
pub use category::normalize_category;
pub use display::{Card, Cards, Checklist, GroupedCards, OperationStatus};
pub use error::{ListsError, Result};
pub use lists::{Lists, ListsBuilder};
pub use models::{CatalogQuery, CategoryGroup, Difficulty, ProgressStats, Template};
pub use params::ToggleStep;
pub use progress::{compute_stats, reset, toggle_step, ProgressTracker};
pub use query::{featured, group_by_category, query_catalog};
pub use registry::{resolve_recent_lists, resolve_saved_lists, Registry, RECENT_MAX};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
