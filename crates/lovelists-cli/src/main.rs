//! Love Lists CLI
//!
//! Command-line front end for browsing planning checklists and tracking
//! progress through them.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lovelists_core::{params::CatalogQuery, ListsBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let lists = ListsBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to initialize lists")?;

    info!("Love Lists started with {} lists", lists.catalog().len());

    let mut cli = Cli::new(lists, TerminalRenderer::new(!no_color));

    match command {
        Some(Browse(args)) => cli.browse(&args.into()),
        Some(Featured(args)) => cli.featured(&args.into()),
        Some(Show(args)) => cli.show(&args.id),
        Some(Open(args)) => cli.open(&args.id),
        Some(Check(args)) => cli.check(&args.into()),
        Some(Reset(args)) => cli.reset(&args.id),
        Some(Save(args)) => cli.save(&args.id),
        Some(Saved) => cli.saved(),
        Some(Recent) => cli.recent(),
        Some(Tags) => cli.tags(),
        Some(Categories) => cli.categories(),
        None => cli.browse(&CatalogQuery::default()),
    }
}
