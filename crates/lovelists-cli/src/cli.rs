//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `lovelists-core` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Lists
//! ```
//!
//! Every handler builds markdown from the core display types and hands it to
//! the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::Args;
use lovelists_core::{
    params::{CatalogQuery, ToggleStep},
    KeyValueStore, Lists, OperationStatus,
};

use crate::renderer::TerminalRenderer;

/// Filters shared by `browse` and `featured`.
#[derive(Args, Default)]
pub struct BrowseArgs {
    /// Free text matched against title, description, category, tags and
    /// "good for"
    #[arg(short, long, default_value = "")]
    pub text: String,
    /// Only lists carrying this tag
    #[arg(long, default_value = "")]
    pub tag: String,
    /// Only lists in this category
    #[arg(short, long, default_value = "")]
    pub category: String,
}

impl From<BrowseArgs> for CatalogQuery {
    fn from(val: BrowseArgs) -> Self {
        CatalogQuery {
            text: val.text,
            tag: val.tag,
            category: val.category,
        }
    }
}

/// A single list, by catalog ID.
#[derive(Args)]
pub struct ListIdArgs {
    #[arg(help = "ID of the list, as shown next to its title")]
    pub id: String,
}

/// Check or uncheck a step
///
/// Steps are numbered from 1 as displayed by `show` and `open`.
#[derive(Args)]
pub struct CheckArgs {
    #[arg(help = "ID of the list")]
    pub id: String,
    #[arg(
        help = "Step number as displayed (1 = first step)",
        value_parser = parse_step_number
    )]
    pub step: usize,
}

/// Parse a 1-based step number, rejecting 0 and anything that does not fit
/// a `usize`.
fn parse_step_number(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("step numbers start at 1".to_string()),
        Ok(step) => Ok(step),
        Err(e) => Err(format!("'{value}' is not a step number: {e}")),
    }
}

impl From<CheckArgs> for ToggleStep {
    fn from(val: CheckArgs) -> Self {
        ToggleStep {
            id: val.id,
            index: val.step - 1,
        }
    }
}

/// Runs one command against a [`Lists`] and renders the result.
pub struct Cli<S> {
    lists: Lists<S>,
    renderer: TerminalRenderer,
}

impl<S: KeyValueStore> Cli<S> {
    pub fn new(lists: Lists<S>, renderer: TerminalRenderer) -> Self {
        Self { lists, renderer }
    }

    pub fn browse(&self, query: &CatalogQuery) -> Result<()> {
        let grouped = self
            .lists
            .browse(query)
            .context("Failed to browse lists")?;

        let title = if query.is_active() {
            "Matching Lists"
        } else {
            "All Lists"
        };
        self.renderer
            .render(&format!("# {title} ({})\n\n{grouped}", grouped.card_count()))
    }

    pub fn featured(&self, query: &CatalogQuery) -> Result<()> {
        let cards = self
            .lists
            .featured(query)
            .context("Failed to load featured lists")?;
        self.renderer.render(&format!("# Featured\n\n{cards}"))
    }

    pub fn show(&self, id: &str) -> Result<()> {
        let checklist = self
            .lists
            .show(id)
            .with_context(|| format!("Failed to show list '{id}'"))?;
        self.renderer.render(&checklist.to_string())
    }

    pub fn open(&mut self, id: &str) -> Result<()> {
        let checklist = self
            .lists
            .open_list(id)
            .with_context(|| format!("Failed to open list '{id}'"))?;
        self.renderer.render(&checklist.to_string())
    }

    pub fn check(&mut self, params: &ToggleStep) -> Result<()> {
        let checklist = self
            .lists
            .toggle_step(params)
            .with_context(|| format!("Failed to update list '{}'", params.id))?;
        self.renderer.render(&checklist.to_string())
    }

    pub fn reset(&mut self, id: &str) -> Result<()> {
        let checklist = self
            .lists
            .reset_list(id)
            .with_context(|| format!("Failed to reset list '{id}'"))?;
        let status = OperationStatus::success(format!("Reset '{id}'"));
        self.renderer.render(&format!("{status}\n{checklist}"))
    }

    pub fn save(&mut self, id: &str) -> Result<()> {
        let saved = self
            .lists
            .toggle_saved(id)
            .with_context(|| format!("Failed to save list '{id}'"))?;
        let message = if saved {
            format!("Saved '{id}'")
        } else {
            format!("Removed '{id}' from saved lists")
        };
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    pub fn saved(&self) -> Result<()> {
        let cards = self
            .lists
            .saved_lists()
            .context("Failed to load saved lists")?;
        self.renderer.render(&format!("# Saved Lists\n\n{cards}"))
    }

    pub fn recent(&self) -> Result<()> {
        let cards = self
            .lists
            .recent_lists()
            .context("Failed to load recent lists")?;
        self.renderer.render(&format!("# Recent Lists\n\n{cards}"))
    }

    pub fn tags(&self) -> Result<()> {
        self.renderer
            .render(&bullet_list("Tags", &self.lists.catalog().tags()))
    }

    pub fn categories(&self) -> Result<()> {
        self.renderer
            .render(&bullet_list("Categories", &self.lists.catalog().categories()))
    }
}

fn bullet_list(title: &str, items: &[String]) -> String {
    let mut output = format!("# {title}\n\n");
    if items.is_empty() {
        output.push_str("None.\n");
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args_convert_to_zero_based_index() {
        let params: ToggleStep = CheckArgs {
            id: "date-night".to_string(),
            step: 1,
        }
        .into();
        assert_eq!(params.id, "date-night");
        assert_eq!(params.index, 0);
    }

    #[test]
    fn test_parse_step_number() {
        assert_eq!(parse_step_number("3"), Ok(3));
        assert!(parse_step_number("0").is_err());
        assert!(parse_step_number("-1").is_err());
        assert!(parse_step_number("99999999999999999999999").is_err());
    }

    #[test]
    fn test_browse_args_convert_to_query() {
        let query: CatalogQuery = BrowseArgs {
            text: "wed".to_string(),
            ..Default::default()
        }
        .into();
        assert_eq!(query, CatalogQuery::text("wed"));
    }

    #[test]
    fn test_bullet_list() {
        let items = vec!["home".to_string(), "wedding".to_string()];
        assert_eq!(bullet_list("Tags", &items), "# Tags\n\n- home\n- wedding\n");
        assert_eq!(bullet_list("Tags", &[]), "# Tags\n\nNone.\n");
    }
}
