//! `skillpack plugin`

use crate::error::{CliError, Result};
use colored::Colorize;
use skillpack_core::{PluginGenerator, Workspace};

pub fn run_plugin(workspace: &Workspace, skill: Option<&str>, all: bool) -> Result<()> {
    let generator = PluginGenerator::new(workspace)?;

    if all {
        let skills = generator.skill_names()?;
        println!("{} Generating {} plugins...", "=>".blue().bold(), skills.len());
        let report = generator.generate_all()?;
        for name in &report.succeeded {
            println!("   {} {}", "+".green(), name);
        }
        return super::finish_batch(report, "plugins");
    }

    let skill = skill.ok_or_else(|| CliError::user("Specify a skill name or --all"))?;
    println!("{} Generating plugin: {}", "=>".blue().bold(), skill.cyan());
    let plugin = generator.generate(skill)?;

    for command in &plugin.commands {
        println!("   {} command {}", "+".green(), command);
    }
    for agent in &plugin.agents {
        println!("   {} agent {}", "+".green(), agent);
    }
    println!("{} Plugin generated: {}", "OK".green().bold(), plugin.dir);
    Ok(())
}
