//! Manifest schemas for plugins and the marketplace.

pub mod marketplace;
pub mod plugin;

pub use marketplace::{MarketplaceEntry, MarketplaceManifest, MarketplaceMetadata, Owner};
pub use plugin::{Author, AuthorField, PathSpec, PluginManifest, RepositoryField, RepositoryInfo};
