//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// skillpack - Package skills into plugins, bundles and a marketplace
#[derive(Parser, Debug)]
#[command(name = "skillpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Catalog file (TOML, JSON or YAML); defaults to <root>/skillpack.toml
    /// or the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the plugin for one skill, or for every skill
    ///
    /// Examples:
    ///   skillpack plugin threejs-webgl
    ///   skillpack plugin --all
    Plugin {
        /// Skill directory name under the skills root
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        skill: Option<String>,

        /// Generate every skill except the excluded ones
        #[arg(long)]
        all: bool,
    },

    /// Generate one bundle plugin, or every catalog bundle
    Bundle {
        /// Bundle key from the catalog
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        key: Option<String>,

        /// Generate every bundle
        #[arg(long)]
        all: bool,
    },

    /// List the bundles defined in the catalog
    Bundles,

    /// Regenerate the marketplace manifest from the plugins on disk
    Marketplace,

    /// Validate the marketplace manifest and every plugin
    Validate,

    /// Migrate plugin manifests into the canonical schema
    Fix {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}
