//! Skill discovery and `SKILL.md` frontmatter parsing.

use crate::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use skillpack_fs::{NormalizedPath, PluginPath, io, tree};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Frontmatter fields the generators read from `SKILL.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFrontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct RawFrontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(flatten)]
    _rest: BTreeMap<String, serde_yaml::Value>,
}

/// Opening fence, lazily captured body, closing fence at end of line or file.
static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Extract the raw YAML block between the leading `---` fences.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    FRONTMATTER
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse frontmatter YAML.
///
/// Hand-written skills often carry unquoted descriptions containing `: `,
/// which strict YAML rejects. Those fall back to a `key: value` split on
/// the first colon of each line.
pub fn parse_frontmatter(yaml: &str) -> SkillFrontmatter {
    match serde_yaml::from_str::<RawFrontmatter>(yaml) {
        Ok(raw) => SkillFrontmatter {
            name: raw.name.filter(|s| !s.trim().is_empty()),
            description: raw.description.filter(|s| !s.trim().is_empty()),
        },
        Err(e) => {
            tracing::debug!(error = %e, "frontmatter is not strict YAML, using line parser");
            parse_frontmatter_lines(yaml)
        }
    }
}

fn parse_frontmatter_lines(yaml: &str) -> SkillFrontmatter {
    let mut fields = BTreeMap::new();
    for line in yaml.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            fields.insert(key.trim().to_string(), value.to_string());
        }
    }
    SkillFrontmatter {
        name: fields.remove("name").filter(|s| !s.is_empty()),
        description: fields.remove("description").filter(|s| !s.is_empty()),
    }
}

/// A skill directory loaded from the skills root.
#[derive(Debug, Clone)]
pub struct Skill {
    /// Directory name; the skill's identity.
    pub slug: String,
    pub dir: NormalizedPath,
    pub frontmatter: SkillFrontmatter,
    /// `scripts/*.py` helpers, sorted by file name.
    pub scripts: Vec<NormalizedPath>,
}

impl Skill {
    /// Load `<skills_root>/<slug>`.
    pub fn load(skills_root: &NormalizedPath, slug: &str) -> Result<Self> {
        let dir = skills_root.join(slug);
        if !dir.is_dir() {
            return Err(Error::SkillNotFound {
                name: slug.to_string(),
                path: skills_root.to_native(),
            });
        }

        let skill_md = dir.join(PluginPath::SkillFile.as_str());
        if !skill_md.is_file() {
            return Err(Error::MissingSkillFile {
                path: dir.to_native(),
            });
        }

        let content = io::read_text(&skill_md)?;
        let yaml = extract_frontmatter(&content).ok_or_else(|| Error::MissingFrontmatter {
            path: skill_md.to_native(),
        })?;
        let frontmatter = parse_frontmatter(yaml);

        let scripts = tree::list_files(&dir.join(PluginPath::ScriptsDir.as_str()), "py")?;

        Ok(Self {
            slug: slug.to_string(),
            dir,
            frontmatter,
            scripts,
        })
    }

    /// Script stems in name order (`setup_scene.py` -> `setup_scene`).
    pub fn script_stems(&self) -> Vec<String> {
        self.scripts
            .iter()
            .filter_map(|s| s.file_stem())
            .map(str::to_string)
            .collect()
    }
}

/// Title-case each word: a letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise (`"3d authoring"` -> `"3D Authoring"`).
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_frontmatter_block() {
        let content = "---\nname: Three.js WebGL\ndescription: 3D scenes\n---\n# Body\n";
        assert_eq!(
            extract_frontmatter(content),
            Some("name: Three.js WebGL\ndescription: 3D scenes")
        );
    }

    #[test]
    fn frontmatter_at_end_of_file() {
        assert_eq!(extract_frontmatter("---\nname: x\n---"), Some("name: x"));
    }

    #[test]
    fn no_frontmatter_without_leading_fence() {
        assert_eq!(extract_frontmatter("# Title\n---\nname: x\n---\n"), None);
    }

    #[test]
    fn strict_yaml_frontmatter() {
        let fm = parse_frontmatter("name: Three.js WebGL\ndescription: \"Build: scenes\"");
        assert_eq!(fm.name.as_deref(), Some("Three.js WebGL"));
        assert_eq!(fm.description.as_deref(), Some("Build: scenes"));
    }

    #[test]
    fn lenient_frontmatter_with_colon_in_value() {
        let fm = parse_frontmatter("name: gsap\ndescription: Use when: animating timelines");
        assert_eq!(fm.name.as_deref(), Some("gsap"));
        assert_eq!(fm.description.as_deref(), Some("Use when: animating timelines"));
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("react spring physics"), "React Spring Physics");
        assert_eq!(title_case("3d authoring"), "3D Authoring");
        assert_eq!(title_case("setup scene"), "Setup Scene");
        assert_eq!(title_case("WEB design"), "Web Design");
    }
}
