//! skillpack CLI
//!
//! Packages skills into installable plugins and bundles, maintains the
//! marketplace manifest and repairs legacy plugin manifests.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use skillpack_core::Workspace;
use skillpack_fs::NormalizedPath;
use std::path::PathBuf;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let workspace = open_workspace(cli.root, cli.catalog)?;
    execute_command(&workspace, cli.command)
}

fn open_workspace(root: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<Workspace> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let root = dunce::canonicalize(&root)?;
    tracing::debug!(root = %root.display(), "repository root");

    let catalog = catalog.map(NormalizedPath::from);
    Ok(Workspace::discover(NormalizedPath::new(root), catalog.as_ref())?)
}

fn execute_command(workspace: &Workspace, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plugin { skill, all } => commands::run_plugin(workspace, skill.as_deref(), all),
        Commands::Bundle { key, all } => commands::run_bundle(workspace, key.as_deref(), all),
        Commands::Bundles => commands::run_bundles(workspace),
        Commands::Marketplace => commands::run_marketplace(workspace),
        Commands::Validate => commands::run_validate(workspace),
        Commands::Fix { dry_run } => commands::run_fix(workspace, dry_run),
    }
}
