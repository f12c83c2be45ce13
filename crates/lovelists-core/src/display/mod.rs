//! Markdown formatting for catalog cards, grouped views and checklists.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here add context such as progress and saved state, or
//! handle empty collections. The CLI feeds the resulting markdown to its
//! terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Template     │    │  Card, Cards,   │    │    Markdown     │
//! │  ProgressStats  │───▶│ GroupedCards,   │───▶│     output      │
//! │                 │    │   Checklist     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: `Card`, `Cards` and `GroupedCards`
//! - [`checklist`]: one opened list with per-step check marks
//! - [`status`]: short confirmation messages (`OperationStatus`)
//! - [`models`]: Display implementations for domain models

pub mod checklist;
pub mod collections;
pub mod models;
pub mod status;

pub use checklist::Checklist;
pub use collections::{Card, CardGroup, Cards, GroupedCards};
pub use status::OperationStatus;
