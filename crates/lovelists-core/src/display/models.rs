//! Display implementations for domain models.

use std::fmt;

use crate::models::{Difficulty, ProgressStats, Template};

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ProgressStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.done, self.total, self.pct)
    }
}

impl Template {
    /// Metadata bullet list shared by cards and checklists. Empty fields are
    /// left out.
    pub(crate) fn fmt_meta(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Category**: {}", self.display_category())?;
        if let Some(time) = self.time_label() {
            writeln!(f, "- **Time**: {time}")?;
        }
        if let Some(difficulty) = self.difficulty {
            writeln!(f, "- **Difficulty**: {difficulty}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        if !self.good_for.is_empty() {
            writeln!(f, "- **Good for**: {}", self.good_for.join(", "))?;
        }
        Ok(())
    }
}
