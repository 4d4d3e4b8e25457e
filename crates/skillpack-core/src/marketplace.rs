//! Marketplace generation: index every plugin under the plugins root.

use crate::report::PluginKind;
use crate::workspace::{PluginDirs, Workspace};
use crate::Result;
use skillpack_fs::path::dot_relative;
use skillpack_fs::{ConfigStore, NormalizedPath, io, tree};
use skillpack_meta::catalog::{BUNDLE_CATEGORY, DEFAULT_CATEGORY};
use skillpack_meta::schema::marketplace::{MarketplaceMetadata, Owner};
use skillpack_meta::{MarketplaceEntry, MarketplaceManifest, PluginManifest};

/// Outcome of a marketplace run.
#[derive(Debug, Clone)]
pub struct MarketplaceReport {
    pub path: NormalizedPath,
    pub manifest: MarketplaceManifest,
    /// Plugin directories without a `plugin.json`
    pub skipped: Vec<String>,
}

impl MarketplaceReport {
    pub fn individual_count(&self) -> usize {
        self.manifest.individual_count()
    }

    pub fn bundle_count(&self) -> usize {
        self.manifest.bundle_count()
    }
}

pub struct MarketplaceGenerator<'a> {
    workspace: &'a Workspace,
}

impl<'a> MarketplaceGenerator<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Build the marketplace manifest without writing it.
    ///
    /// Individual plugins come first, then bundles, each sorted by
    /// directory name. A manifest that does not parse aborts the run.
    pub fn collect(&self) -> Result<(MarketplaceManifest, Vec<String>)> {
        let catalog = self.workspace.catalog();
        let mut plugins = Vec::new();
        let mut skipped = Vec::new();

        for kind in PluginKind::ALL {
            for dir_name in tree::list_dirs(&self.workspace.kind_root(kind))? {
                let dirs = self.workspace.plugin_dirs(kind, &dir_name);
                let manifest_path = dirs.manifest();
                if !manifest_path.is_file() {
                    tracing::warn!(plugin = %dir_name, "no plugin.json found, skipping");
                    skipped.push(dir_name);
                    continue;
                }
                let manifest: PluginManifest = ConfigStore::new().load(&manifest_path)?;
                plugins.push(self.entry(kind, &dirs, manifest));
                tracing::debug!(plugin = %dir_name, %kind, "added to marketplace");
            }
        }

        let publisher = &catalog.publisher;
        let manifest = MarketplaceManifest {
            name: catalog.marketplace.name.clone(),
            owner: Owner {
                name: publisher.name.clone(),
                url: catalog.marketplace.owner_url.clone(),
            },
            metadata: MarketplaceMetadata {
                description: catalog.marketplace.description.clone(),
                version: publisher.version.clone(),
                plugin_root: catalog.plugin_root(),
                homepage: publisher.homepage.clone(),
                repository: publisher.repository.clone(),
            },
            plugins,
        };
        Ok((manifest, skipped))
    }

    /// Collect and write `marketplace.json` atomically.
    pub fn generate(&self) -> Result<MarketplaceReport> {
        let (manifest, skipped) = self.collect()?;
        let path = self.workspace.marketplace_file();
        io::write_json(&path, &manifest)?;
        tracing::info!(
            path = %path,
            individual = manifest.individual_count(),
            bundles = manifest.bundle_count(),
            "wrote marketplace.json"
        );
        Ok(MarketplaceReport {
            path,
            manifest,
            skipped,
        })
    }

    fn entry(&self, kind: PluginKind, dirs: &PluginDirs, manifest: PluginManifest) -> MarketplaceEntry {
        let catalog = self.workspace.catalog();
        let dir_name = dirs.name();
        let legacy_str = |key: &str| {
            manifest
                .extra
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let (category, includes) = match kind {
            PluginKind::Individual => {
                let category = match catalog.skills.get(dir_name) {
                    Some(entry) => entry.category.clone(),
                    None => legacy_str("category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                };
                (category, None)
            }
            PluginKind::Bundle => {
                let category = legacy_str("category").unwrap_or_else(|| BUNDLE_CATEGORY.to_string());
                let includes = match catalog.bundle(dir_name) {
                    Some(bundle) => bundle.skills.clone(),
                    None => manifest
                        .extra
                        .get("includes")
                        .and_then(|v| serde_json::from_value(v.clone()).ok())
                        .unwrap_or_default(),
                };
                (category, Some(includes))
            }
        };

        MarketplaceEntry {
            source: dot_relative(kind.dir_name(), dir_name),
            version: manifest.version.unwrap_or_else(|| "1.0.0".to_string()),
            description: manifest.description.unwrap_or_default(),
            category,
            tags: manifest.keywords.unwrap_or_default(),
            bundle: kind == PluginKind::Bundle,
            includes,
            author: manifest.author,
            license: manifest
                .license
                .unwrap_or_else(|| catalog.publisher.license.clone()),
            name: manifest.name,
        }
    }
}
