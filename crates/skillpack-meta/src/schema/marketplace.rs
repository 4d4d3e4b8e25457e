//! `marketplace.json`: the index of every published plugin.

use super::plugin::AuthorField;
use serde::{Deserialize, Serialize};

/// Top-level keys every marketplace manifest must carry.
pub const REQUIRED_KEYS: &[&str] = &["name", "owner", "metadata", "plugins"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceManifest {
    pub name: String,
    pub owner: Owner,
    pub metadata: MarketplaceMetadata,
    pub plugins: Vec<MarketplaceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceMetadata {
    pub description: String,
    pub version: String,
    /// Directory plugin `source` paths are relative to, e.g. `./plugins`.
    #[serde(rename = "pluginRoot")]
    pub plugin_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

/// One plugin as listed in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceEntry {
    pub name: String,
    /// `./individual/<dir>` or `./bundles/<dir>`, relative to `pluginRoot`.
    pub source: String,
    pub version: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bundle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorField>,
    pub license: String,
}

impl MarketplaceManifest {
    pub fn individual_count(&self) -> usize {
        self.plugins.iter().filter(|p| !p.bundle).count()
    }

    pub fn bundle_count(&self) -> usize {
        self.plugins.iter().filter(|p| p.bundle).count()
    }
}
