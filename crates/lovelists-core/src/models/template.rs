//! Template model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::normalize_category;

/// How demanding a list is to work through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A catalog entry describing one checklist.
///
/// Templates are immutable once loaded. The `id` is the only key that
/// persisted state (progress, saved set, recent sequence) is joined on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable identifier, unique within the catalog
    pub id: String,

    /// Display title
    pub title: String,

    /// One-paragraph summary of the list
    #[serde(default)]
    pub description: String,

    /// Raw category label; may be a legacy label, see [`normalize_category`]
    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Time estimate in minutes; 0 means "no time shown"
    #[serde(default)]
    pub time_mins: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Audiences or occasions the list suits
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub good_for: Vec<String>,

    /// Ordered steps; the length is the authority for progress records
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Template {
    /// Number of steps, which is the length every progress record is
    /// reconciled to.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The category as it should be compared, grouped and displayed.
    pub fn display_category(&self) -> String {
        normalize_category(&self.category)
    }

    /// Human readable time estimate, or `None` when no time is set.
    pub fn time_label(&self) -> Option<String> {
        match self.time_mins {
            0 => None,
            mins if mins < 60 => Some(format!("{mins} min")),
            mins if mins % 60 == 0 => Some(format!("{} hr", mins / 60)),
            mins => Some(format!("{} hr {} min", mins / 60, mins % 60)),
        }
    }

    /// Case-insensitive whole-string tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}
