//! `skillpack validate`

use crate::error::Result;
use colored::Colorize;
use skillpack_core::{MarketplaceValidator, Workspace};

pub fn run_validate(workspace: &Workspace) -> Result<()> {
    println!("{} Validating marketplace and plugins...", "=>".blue().bold());
    let report = MarketplaceValidator::new(workspace).validate();

    println!(
        "   {} marketplace entries, {} plugin directories",
        report.entries, report.plugins
    );

    if !report.errors.is_empty() {
        println!("{} ({}):", "ERRORS".red().bold(), report.errors.len());
        for error in &report.errors {
            println!("   {} {}", "!".red(), error);
        }
    }
    if !report.warnings.is_empty() {
        println!("{} ({}):", "WARNINGS".yellow().bold(), report.warnings.len());
        for warning in &report.warnings {
            println!("   {} {}", "-".yellow(), warning);
        }
    }

    if report.is_valid() {
        if report.warnings.is_empty() {
            println!("{} All validations passed", "OK".green().bold());
        } else {
            println!("{} No errors (warnings present)", "OK".green().bold());
        }
    }
    report.into_result()?;
    Ok(())
}
