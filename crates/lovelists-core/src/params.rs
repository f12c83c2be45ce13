//! Parameter structures for Love Lists operations.
//!
//! Interface-agnostic request types. The CLI defines its own clap argument
//! structs and converts them into these with `From`, so the core carries no
//! framework derives beyond serde.

use serde::{Deserialize, Serialize};

pub use crate::models::CatalogQuery;

/// Parameters for checking or unchecking one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleStep {
    /// Template id of the list
    pub id: String,
    /// Zero-based step index
    pub index: usize,
}
