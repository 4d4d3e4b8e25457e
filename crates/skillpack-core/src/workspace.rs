//! Repository layout resolved against a root and a catalog.

use crate::report::PluginKind;
use skillpack_fs::path::dot_relative;
use skillpack_fs::{NormalizedPath, PluginPath, tree};
use skillpack_meta::Catalog;

/// A repository root together with the catalog that describes it.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: NormalizedPath,
    catalog: Catalog,
}

impl Workspace {
    pub fn new(root: impl Into<NormalizedPath>, catalog: Catalog) -> Self {
        Self {
            root: root.into(),
            catalog,
        }
    }

    /// Resolve the catalog for `root` (explicit path, `skillpack.toml`, built-in).
    pub fn discover(
        root: impl Into<NormalizedPath>,
        catalog_path: Option<&NormalizedPath>,
    ) -> crate::Result<Self> {
        let root = root.into();
        let catalog = Catalog::discover(&root, catalog_path)?;
        Ok(Self { root, catalog })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn skills_root(&self) -> NormalizedPath {
        self.root.join(&self.catalog.layout.skills_dir)
    }

    pub fn plugins_root(&self) -> NormalizedPath {
        self.root.join(&self.catalog.layout.plugins_dir)
    }

    /// `plugins/individual` or `plugins/bundles`.
    pub fn kind_root(&self, kind: PluginKind) -> NormalizedPath {
        self.plugins_root().join(kind.dir_name())
    }

    pub fn plugin_dirs(&self, kind: PluginKind, name: &str) -> PluginDirs {
        PluginDirs::new(self.kind_root(kind).join(name))
    }

    pub fn marketplace_file(&self) -> NormalizedPath {
        self.root.join(&self.catalog.layout.marketplace_file)
    }
}

/// Well-known locations inside one plugin directory.
#[derive(Debug, Clone)]
pub struct PluginDirs {
    pub root: NormalizedPath,
}

impl PluginDirs {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// Directory basename; a plugin's name must equal it.
    pub fn name(&self) -> &str {
        self.root.file_name().unwrap_or_default()
    }

    pub fn meta_dir(&self) -> NormalizedPath {
        self.root.join(PluginPath::MetaDir.as_str())
    }

    pub fn manifest(&self) -> NormalizedPath {
        self.meta_dir().join(PluginPath::PluginManifest.as_str())
    }

    pub fn skills(&self) -> NormalizedPath {
        self.root.join(PluginPath::SkillsDir.as_str())
    }

    pub fn commands(&self) -> NormalizedPath {
        self.root.join(PluginPath::CommandsDir.as_str())
    }

    pub fn agents(&self) -> NormalizedPath {
        self.root.join(PluginPath::AgentsDir.as_str())
    }

    /// Resolve a `./`-relative manifest path against the plugin root.
    pub fn resolve(&self, relative: &str) -> NormalizedPath {
        self.root.join(relative)
    }

    /// Markdown files in a plugin subdirectory as sorted `./<dir>/<file>.md`
    /// manifest entries. A missing directory yields no entries.
    pub fn markdown_entries(&self, relative_dir: &str) -> skillpack_fs::Result<Vec<String>> {
        Ok(tree::list_files(&self.resolve(relative_dir), "md")?
            .iter()
            .filter_map(NormalizedPath::file_name)
            .map(|file| dot_relative(relative_dir, file))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_locations() {
        let ws = Workspace::new("/repo", Catalog::builtin().unwrap());
        assert_eq!(ws.skills_root().as_str(), "/repo/.claude/skills");
        assert_eq!(ws.kind_root(PluginKind::Bundle).as_str(), "/repo/plugins/bundles");
        assert_eq!(
            ws.marketplace_file().as_str(),
            "/repo/.claude-plugin/marketplace.json"
        );
    }

    #[test]
    fn plugin_dirs_layout() {
        let ws = Workspace::new("/repo", Catalog::builtin().unwrap());
        let dirs = ws.plugin_dirs(PluginKind::Individual, "animejs");
        assert_eq!(dirs.name(), "animejs");
        assert_eq!(
            dirs.manifest().as_str(),
            "/repo/plugins/individual/animejs/.claude-plugin/plugin.json"
        );
        assert_eq!(
            dirs.resolve("./commands/help.md").as_str(),
            "/repo/plugins/individual/animejs/commands/help.md"
        );
    }
}
