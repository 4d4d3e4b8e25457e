//! Command implementations for skillpack-cli

pub mod bundle;
pub mod fix;
pub mod marketplace;
pub mod plugin;
pub mod validate;

pub use bundle::{run_bundle, run_bundles};
pub use fix::run_fix;
pub use marketplace::run_marketplace;
pub use plugin::run_plugin;
pub use validate::run_validate;

use colored::Colorize;
use skillpack_core::BatchReport;

/// Print the summary of an `--all` run and turn failures into an error.
fn finish_batch(report: BatchReport, what: &str) -> crate::error::Result<()> {
    for (name, message) in &report.failed {
        println!("   {} {}: {}", "!".red(), name, message);
    }
    let ok = report.succeeded.len();
    let total = report.total();
    if report.is_success() {
        println!("{} Generated {ok} {what}", "OK".green().bold());
    } else {
        println!("{} Generated {ok} of {total} {what}", "WARN".yellow().bold());
    }
    report.into_result(what)?;
    Ok(())
}
