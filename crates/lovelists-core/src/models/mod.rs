//! Data models for templates, queries and progress.
//!
//! [`Template`] is the catalog-provided record everything else keys off.
//! [`CatalogQuery`] and [`CategoryGroup`] describe the browse view, and
//! [`ProgressStats`] is the derived done/total/percent summary shown on
//! cards and checklists. Display implementations live in
//! [`crate::display`].

pub mod progress;
pub mod query;
pub mod template;

#[cfg(test)]
mod tests;

pub use progress::ProgressStats;
pub use query::{CatalogQuery, CategoryGroup};
pub use template::{Difficulty, Template};
