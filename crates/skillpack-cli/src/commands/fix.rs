//! `skillpack fix`

use crate::error::{CliError, Result};
use colored::Colorize;
use skillpack_core::{FixOutcome, ManifestFixer, Workspace};

pub fn run_fix(workspace: &Workspace, dry_run: bool) -> Result<()> {
    let verb = if dry_run { "Checking" } else { "Fixing" };
    println!("{} {verb} plugin manifests...", "=>".blue().bold());

    let report = ManifestFixer::new(workspace).dry_run(dry_run).fix_all()?;

    for plugin in &report.plugins {
        let label = format!("{}/{}", plugin.kind, plugin.name);
        match &plugin.outcome {
            FixOutcome::Unchanged => println!("   {} {label} (no changes needed)", "=".dimmed()),
            FixOutcome::Fixed { changes } => {
                let marker = if dry_run { "~".yellow() } else { "+".green() };
                println!("   {marker} {label}");
                for change in changes {
                    println!("       {change}");
                }
            }
            FixOutcome::Skipped => println!("   {} {label} (no plugin.json)", "-".yellow()),
            FixOutcome::Failed { message } => println!("   {} {label}: {message}", "!".red()),
        }
    }

    let summary = if dry_run { "would fix" } else { "fixed" };
    println!(
        "{} {} {summary}, {} unchanged",
        "OK".green().bold(),
        report.fixed_count(),
        report.unchanged_count()
    );

    if report.failed_count() > 0 {
        return Err(CliError::user(format!(
            "{} manifest(s) could not be fixed",
            report.failed_count()
        )));
    }
    Ok(())
}
