//! Well-known names inside skills, plugins and the marketplace.

/// Fixed file and directory names of the plugin layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginPath {
    /// `.claude-plugin` metadata directory (per plugin and at repo root)
    MetaDir,
    /// `plugin.json` inside the metadata directory
    PluginManifest,
    /// `marketplace.json` inside the root metadata directory
    MarketplaceManifest,
    /// `SKILL.md` at the top of a skill
    SkillFile,
    /// `skills` directory of a plugin
    SkillsDir,
    /// `commands` directory of a plugin
    CommandsDir,
    /// `agents` directory of a plugin
    AgentsDir,
    /// `scripts` helper directory of a skill
    ScriptsDir,
    /// `individual` plugins root
    IndividualDir,
    /// `bundles` plugins root
    BundlesDir,
}

impl PluginPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MetaDir => ".claude-plugin",
            Self::PluginManifest => "plugin.json",
            Self::MarketplaceManifest => "marketplace.json",
            Self::SkillFile => "SKILL.md",
            Self::SkillsDir => "skills",
            Self::CommandsDir => "commands",
            Self::AgentsDir => "agents",
            Self::ScriptsDir => "scripts",
            Self::IndividualDir => "individual",
            Self::BundlesDir => "bundles",
        }
    }
}

impl std::fmt::Display for PluginPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
