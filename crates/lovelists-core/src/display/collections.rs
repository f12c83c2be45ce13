//! Card views for browsing: single cards, flat lists and category groups.

use std::{fmt, ops::Index};

use crate::models::{ProgressStats, Template};

/// One catalog entry as shown in a browse list, with its stored progress
/// and saved state.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    pub template: &'a Template,
    pub stats: ProgressStats,
    pub saved: bool,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.saved { " ★" } else { "" };
        writeln!(
            f,
            "### {} (ID: {}){marker}",
            self.template.title, self.template.id
        )?;
        writeln!(f)?;

        if !self.template.description.is_empty() {
            writeln!(f, "{}", self.template.description)?;
            writeln!(f)?;
        }

        self.template.fmt_meta(f)?;
        if self.stats.is_started() {
            writeln!(f, "- **Progress**: {}", self.stats)?;
        } else {
            writeln!(f, "- **Steps**: {}", self.stats.total)?;
        }
        writeln!(f)
    }
}

/// Newtype wrapper for displaying a flat list of cards.
///
/// Renders "No lists found." when empty.
#[derive(Debug, Clone, Default)]
pub struct Cards<'a>(pub Vec<Card<'a>>);

impl<'a> Cards<'a> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card<'a>> {
        self.0.iter()
    }
}

impl<'a> Index<usize> for Cards<'a> {
    type Output = Card<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for Cards<'a> {
    type Item = Card<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No lists found.")
        } else {
            for card in &self.0 {
                write!(f, "{card}")?;
            }
            Ok(())
        }
    }
}

/// Cards sharing one normalized category.
#[derive(Debug, Clone)]
pub struct CardGroup<'a> {
    pub category: String,
    pub cards: Vec<Card<'a>>,
}

/// The browse view: a `## Category` heading per group, cards underneath.
#[derive(Debug, Clone, Default)]
pub struct GroupedCards<'a>(pub Vec<CardGroup<'a>>);

impl GroupedCards<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of cards across all groups.
    pub fn card_count(&self) -> usize {
        self.0.iter().map(|g| g.cards.len()).sum()
    }
}

impl fmt::Display for GroupedCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lists found.");
        }
        for group in &self.0 {
            writeln!(f, "## {} ({})", group.category, group.cards.len())?;
            writeln!(f)?;
            for card in &group.cards {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
