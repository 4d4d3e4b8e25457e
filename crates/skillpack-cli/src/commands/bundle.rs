//! `skillpack bundle` and `skillpack bundles`

use crate::error::{CliError, Result};
use colored::Colorize;
use skillpack_core::{BundleGenerator, Workspace};

pub fn run_bundle(workspace: &Workspace, key: Option<&str>, all: bool) -> Result<()> {
    let generator = BundleGenerator::new(workspace)?;

    if all {
        let keys = workspace.catalog().bundle_keys();
        println!("{} Generating {} bundles...", "=>".blue().bold(), keys.len());
        let report = generator.generate_all()?;
        for name in &report.succeeded {
            println!("   {} {}", "+".green(), name);
        }
        return super::finish_batch(report, "bundles");
    }

    let key = key.ok_or_else(|| CliError::user("Specify a bundle name or --all"))?;
    println!("{} Generating bundle: {}", "=>".blue().bold(), key.cyan());
    let bundle = generator.generate(key)?;

    for skill in &bundle.included {
        println!("   {} skill {}", "+".green(), skill);
    }
    for skill in &bundle.missing {
        println!("   {} skill not found: {}", "!".yellow(), skill);
    }
    println!(
        "   {} commands, {} agents",
        bundle.commands.len(),
        bundle.agents.len()
    );
    println!("{} Bundle generated: {}", "OK".green().bold(), bundle.dir);
    Ok(())
}

pub fn run_bundles(workspace: &Workspace) -> Result<()> {
    let catalog = workspace.catalog();
    println!("{}", "Available bundles:".bold());
    for (key, bundle) in &catalog.bundles {
        println!("  {} {}", key.cyan(), format!("({})", bundle.title).dimmed());
        println!("      {}", bundle.skills.join(", "));
    }
    Ok(())
}
