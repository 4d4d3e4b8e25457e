//! Catalog: the configuration tables that drive plugin generation.
//!
//! Skill categories, tags and display titles, bundle definitions, the
//! publisher identity written into every manifest and the directory layout
//! all live in one TOML document. A `skillpack.toml` at the repository root
//! overrides the built-in catalog.
//!
//! ```toml
//! [publisher]
//! name = "Claude Design Skillstack"
//! license = "Apache-2.0"
//!
//! [marketplace]
//! name = "claude-design-skillstack"
//! description = "..."
//!
//! [skills.threejs-webgl]
//! title = "Three.js WebGL"
//! category = "3d-graphics"
//! tags = ["webgl", "threejs"]
//!
//! [bundles.core-3d-animation]
//! title = "Core 3D & Animation"
//! description = "..."
//! skills = ["threejs-webgl", "gsap-scrolltrigger"]
//! tags = ["bundle", "3d"]
//! ```

use crate::skill::title_case;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use skillpack_fs::{ConfigStore, IgnoreSet, NormalizedPath, PluginPath};
use std::collections::BTreeMap;

/// Catalog file looked up at the repository root.
pub const CATALOG_FILENAME: &str = "skillpack.toml";

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Category used for skills the catalog does not list.
pub const DEFAULT_CATEGORY: &str = "general";

/// Category recorded for bundle plugins.
pub const BUNDLE_CATEGORY: &str = "bundle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub publisher: Publisher,
    pub marketplace: MarketplaceIdentity,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub copy: CopyConfig,
    #[serde(default)]
    pub skills: BTreeMap<String, SkillEntry>,
    /// Bundles in the order the catalog lists them.
    #[serde(default, with = "ordered_table")]
    pub bundles: Vec<(String, BundleDefinition)>,
}

/// Identity stamped into every generated plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Publisher {
    pub name: String,
    /// Used when a legacy string `author` is expanded into an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "default_license")]
    pub license: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketplaceIdentity {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_url: Option<String>,
}

/// Repository-relative locations of skills, plugins and the marketplace file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LayoutConfig {
    pub skills_dir: String,
    pub plugins_dir: String,
    pub marketplace_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            skills_dir: ".claude/skills".into(),
            plugins_dir: "plugins".into(),
            marketplace_file: format!("{}/{}", PluginPath::MetaDir, PluginPath::MarketplaceManifest),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CopyConfig {
    /// File-name patterns never copied into a plugin.
    pub ignore: Vec<String>,
    /// Skills `plugin --all` never packages.
    pub excluded_skills: Vec<String>,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            ignore: vec!["*.zip".into(), ".DS_Store".into()],
            excluded_skills: vec!["skill-creator".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleDefinition {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Which agent persona a skill category maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFamily {
    Graphics,
    Animation,
    Authoring,
    Generic,
}

impl CategoryFamily {
    pub fn from_category(category: &str) -> Self {
        match category {
            "3d-graphics" | "2d-graphics" => Self::Graphics,
            "animation" => Self::Animation,
            "3d-authoring" => Self::Authoring,
            _ => Self::Generic,
        }
    }
}

fn default_license() -> String {
    "Apache-2.0".into()
}

fn default_version() -> String {
    "1.0.0".into()
}

fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let catalog: Self = toml::from_str(BUILTIN_CATALOG)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file (TOML, JSON or YAML by extension).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let catalog: Self = ConfigStore::new().load(path)?;
        catalog.validate()?;
        tracing::debug!(path = %path, "loaded catalog");
        Ok(catalog)
    }

    /// Resolve the catalog for a repository: an explicit path wins, then
    /// `<root>/skillpack.toml`, then the built-in catalog.
    pub fn discover(root: &NormalizedPath, explicit: Option<&NormalizedPath>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = root.join(CATALOG_FILENAME);
        if local.is_file() {
            return Self::load(&local);
        }
        tracing::debug!("no {} found, using built-in catalog", CATALOG_FILENAME);
        Self::builtin()
    }

    /// Reject names that cannot be directory names of a plugin.
    pub fn validate(&self) -> Result<()> {
        for name in self.skills.keys() {
            if !is_slug(name) {
                return Err(Error::InvalidCatalog {
                    message: format!("skill name '{name}' must be lowercase letters, digits and hyphens"),
                });
            }
        }
        for (key, bundle) in &self.bundles {
            if !is_slug(key) {
                return Err(Error::InvalidCatalog {
                    message: format!("bundle name '{key}' must be lowercase letters, digits and hyphens"),
                });
            }
            if bundle.skills.is_empty() {
                return Err(Error::InvalidCatalog {
                    message: format!("bundle '{key}' lists no skills"),
                });
            }
            if let Some(bad) = bundle.skills.iter().find(|s| !is_slug(s)) {
                return Err(Error::InvalidCatalog {
                    message: format!("bundle '{key}' lists invalid skill name '{bad}'"),
                });
            }
        }
        Ok(())
    }

    /// Human-readable title: catalog override, else the title-cased slug.
    pub fn display_title(&self, skill: &str) -> String {
        self.skills
            .get(skill)
            .and_then(|entry| entry.title.clone())
            .unwrap_or_else(|| title_case(&skill.replace('-', " ")))
    }

    pub fn category(&self, skill: &str) -> &str {
        self.skills
            .get(skill)
            .map(|entry| entry.category.as_str())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn family(&self, skill: &str) -> CategoryFamily {
        CategoryFamily::from_category(self.category(skill))
    }

    /// Catalog tags, or the skill name alone when the skill is not listed.
    pub fn tags(&self, skill: &str) -> Vec<String> {
        match self.skills.get(skill) {
            Some(entry) => entry.tags.clone(),
            None => vec![skill.to_string()],
        }
    }

    pub fn bundle(&self, key: &str) -> Option<&BundleDefinition> {
        self.bundles.iter().find(|(name, _)| name == key).map(|(_, bundle)| bundle)
    }

    /// Bundle keys in catalog order.
    pub fn bundle_keys(&self) -> Vec<&str> {
        self.bundles.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_excluded(&self, skill: &str) -> bool {
        self.copy.excluded_skills.iter().any(|s| s == skill)
    }

    pub fn ignore_set(&self) -> Result<IgnoreSet> {
        Ok(IgnoreSet::new(&self.copy.ignore)?)
    }

    /// `pluginRoot` as written into the marketplace metadata.
    pub fn plugin_root(&self) -> String {
        skillpack_fs::path::ensure_dot_prefix(self.layout.plugins_dir.trim_end_matches('/'))
    }
}

/// A table kept in document order, with duplicate keys rejected.
mod ordered_table {
    use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct Entries<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    if entries.iter().any(|(existing, _)| *existing == key) {
                        return Err(de::Error::custom(format!("duplicate key '{key}'")));
                    }
                    entries.push((key, value));
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(Entries(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.skills.len(), 22);
        assert_eq!(catalog.bundles.len(), 5);
        assert_eq!(catalog.publisher.license, "Apache-2.0");
    }

    #[test]
    fn every_bundle_member_is_a_catalog_skill() {
        let catalog = Catalog::builtin().unwrap();
        for (key, bundle) in &catalog.bundles {
            for skill in &bundle.skills {
                assert!(catalog.skills.contains_key(skill), "{key} lists unknown {skill}");
            }
        }
    }

    #[test]
    fn bundles_keep_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.bundle_keys(),
            vec![
                "core-3d-animation",
                "extended-3d-scroll",
                "animation-components",
                "authoring-motion",
                "meta-skills",
            ]
        );
        assert!(catalog.bundle("meta-skills").is_some());
        assert!(catalog.bundle("nope").is_none());
    }

    #[test]
    fn display_title_prefers_override() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.display_title("threejs-webgl"), "Three.js WebGL");
        assert_eq!(catalog.display_title("modern-web-design"), "Modern Web Design");
        assert_eq!(catalog.display_title("unknown-thing"), "Unknown Thing");
    }

    #[test]
    fn unknown_skill_defaults() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.category("my-skill"), DEFAULT_CATEGORY);
        assert_eq!(catalog.tags("my-skill"), vec!["my-skill".to_string()]);
        assert_eq!(catalog.family("my-skill"), CategoryFamily::Generic);
    }

    #[test]
    fn category_families() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.family("pixijs-2d"), CategoryFamily::Graphics);
        assert_eq!(catalog.family("animejs"), CategoryFamily::Animation);
        assert_eq!(catalog.family("spline-interactive"), CategoryFamily::Authoring);
        assert_eq!(catalog.family("barba-js"), CategoryFamily::Generic);
    }

    #[test]
    fn plugin_root_is_dot_relative() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.plugin_root(), "./plugins");
    }
}
