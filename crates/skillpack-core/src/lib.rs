//! Core packaging layer for skillpack
//!
//! Turns skills into plugins and bundles, indexes plugins into the
//! marketplace manifest, validates the published tree and migrates
//! legacy plugin manifests.

pub mod bundle;
pub mod error;
pub mod fix;
pub mod marketplace;
pub mod plugin;
pub mod report;
pub mod templates;
pub mod validate;
pub mod workspace;

pub use bundle::{BundleGenerator, GeneratedBundle};
pub use error::{Error, Result};
pub use fix::{FixOutcome, FixReport, FixedPlugin, ManifestFixer};
pub use marketplace::{MarketplaceGenerator, MarketplaceReport};
pub use plugin::{GeneratedPlugin, PluginGenerator};
pub use report::{BatchReport, PluginKind};
pub use validate::{MarketplaceValidator, ValidationReport};
pub use workspace::{PluginDirs, Workspace};
