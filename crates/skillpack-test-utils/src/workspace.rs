//! [`TestWorkspace`] builder for skill packaging scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Skills root under the default layout.
pub const SKILLS_DIR: &str = ".claude/skills";
/// Plugins root under the default layout.
pub const PLUGINS_DIR: &str = "plugins";
/// Marketplace manifest under the default layout.
pub const MARKETPLACE_FILE: &str = ".claude-plugin/marketplace.json";

/// A temporary repository laid out the way the built-in catalog expects.
///
/// ```rust,no_run
/// use skillpack_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.add_skill("threejs-webgl", "Build 3D scenes", &["setup_scene"]);
/// ws.assert_file_exists(".claude/skills/threejs-webgl/scripts/setup_scene.py");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `relative` (parents created).
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", path.display()))
    }

    pub fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{relative} is not valid JSON: {e}"))
    }

    /// Add a skill with frontmatter `name`/`description` and one
    /// `scripts/<stem>.py` per entry in `scripts`.
    pub fn add_skill(&self, slug: &str, description: &str, scripts: &[&str]) -> PathBuf {
        let skill_md = format!(
            "---\nname: {slug}\ndescription: {description}\n---\n\n# {slug}\n\nSkill body.\n"
        );
        self.add_skill_with(slug, &skill_md, scripts)
    }

    /// Add a skill with a hand-written `SKILL.md`.
    pub fn add_skill_with(&self, slug: &str, skill_md: &str, scripts: &[&str]) -> PathBuf {
        let dir = format!("{SKILLS_DIR}/{slug}");
        self.write(&format!("{dir}/SKILL.md"), skill_md);
        for stem in scripts {
            self.write(
                &format!("{dir}/scripts/{stem}.py"),
                "#!/usr/bin/env python3\nprint('ok')\n",
            );
        }
        self.path(&dir)
    }

    /// Write `plugins/<kind>/<name>/.claude-plugin/plugin.json` verbatim.
    pub fn write_plugin_manifest(&self, kind: &str, name: &str, manifest: &Value) -> PathBuf {
        let mut content = serde_json::to_string_pretty(manifest).unwrap();
        content.push('\n');
        self.write(
            &format!("{PLUGINS_DIR}/{kind}/{name}/.claude-plugin/plugin.json"),
            &content,
        )
    }

    /// A minimal plugin directory as an older generator would have left it:
    /// one skill, directory-string `commands`/`agents`, legacy keys.
    pub fn add_legacy_plugin(&self, kind: &str, name: &str, commands: &[&str], agents: &[&str]) {
        let base = format!("{PLUGINS_DIR}/{kind}/{name}");
        self.write(&format!("{base}/skills/{name}/SKILL.md"), "---\nname: x\n---\n");
        for command in commands {
            self.write(&format!("{base}/commands/{command}.md"), "# command\n");
        }
        for agent in agents {
            self.write(&format!("{base}/agents/{agent}.md"), "# agent\n");
        }
        let manifest = serde_json::json!({
            "name": name,
            "version": "1.0.0",
            "description": format!("{name} plugin"),
            "author": "Claude Design Skillstack",
            "license": "Apache-2.0",
            "repository": { "type": "git", "url": "https://example.com/repo.git" },
            "keywords": [name],
            "category": "animation",
            "skills": "skills/",
            "commands": "commands/",
            "agents": "agents/"
        });
        self.write_plugin_manifest(kind, name, &manifest);
    }

    /// Panics with the path if `relative` does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(full_path.exists(), "Expected file to exist: {}", full_path.display());
    }

    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
