//! A single opened list with its check marks.

use std::fmt;

use crate::models::{ProgressStats, Template};

/// An opened list: the template, its reconciled progress and derived stats.
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist<'a> {
    pub template: &'a Template,
    /// One entry per step, already shaped to the current step count
    pub progress: Vec<bool>,
    pub stats: ProgressStats,
    pub saved: bool,
}

impl fmt::Display for Checklist<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.template;
        let marker = if self.saved { " ★" } else { "" };
        writeln!(f, "# {} (ID: {}){marker}", template.title, template.id)?;
        writeln!(f)?;
        template.fmt_meta(f)?;

        if !template.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", template.description)?;
        }

        if template.steps.is_empty() {
            return writeln!(f, "\nNo steps in this list.");
        }

        writeln!(f, "\n## Steps {}", self.stats)?;
        writeln!(f)?;
        for (i, step) in template.steps.iter().enumerate() {
            let icon = if self.progress.get(i).copied().unwrap_or(false) {
                "✓"
            } else {
                "○"
            };
            writeln!(f, "{}. {icon} {step}", i + 1)?;
        }

        if self.stats.is_complete() {
            writeln!(f, "\nAll done!")?;
        }
        Ok(())
    }
}
