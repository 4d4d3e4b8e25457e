//! `skillpack marketplace`

use crate::error::Result;
use colored::Colorize;
use skillpack_core::{MarketplaceGenerator, Workspace};

pub fn run_marketplace(workspace: &Workspace) -> Result<()> {
    println!("{} Generating marketplace manifest...", "=>".blue().bold());
    let report = MarketplaceGenerator::new(workspace).generate()?;

    for entry in &report.manifest.plugins {
        println!("   {} {}", "+".green(), entry.source);
    }
    for name in &report.skipped {
        println!("   {} no plugin.json for {}", "!".yellow(), name);
    }
    println!("{} Created: {}", "OK".green().bold(), report.path);
    println!("   Individual plugins: {}", report.individual_count());
    println!("   Bundle plugins: {}", report.bundle_count());
    println!("   Total plugins: {}", report.manifest.plugins.len());
    Ok(())
}
