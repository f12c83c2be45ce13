use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BrowseArgs, CheckArgs, ListIdArgs};

/// Love Lists: planning checklists in the terminal
///
/// Browse a catalog of ready-made checklists for dates, events and home
/// admin, tick off steps as you go, and keep a shortlist of saved lists.
/// Progress is stored locally and picked up again on the next run.
#[derive(Parser)]
#[command(version, about, name = "ll")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lovelists/lovelists.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Love Lists CLI
///
/// Running `ll` with no command is the same as `ll browse`.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse lists grouped by category
    #[command(alias = "b")]
    Browse(BrowseArgs),
    /// Show the featured lists
    #[command(alias = "f")]
    Featured(BrowseArgs),
    /// Show a list and its progress
    #[command(alias = "s")]
    Show(ListIdArgs),
    /// Open a list, adding it to your recent lists
    #[command(alias = "o")]
    Open(ListIdArgs),
    /// Check or uncheck one step of a list
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Uncheck every step of a list
    Reset(ListIdArgs),
    /// Save a list, or unsave it if it is already saved
    Save(ListIdArgs),
    /// Show your saved lists
    Saved,
    /// Show recently opened lists
    #[command(alias = "r")]
    Recent,
    /// List every tag in the catalog
    Tags,
    /// List every category in the catalog
    Categories,
}
