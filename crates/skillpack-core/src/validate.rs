//! Marketplace validation.
//!
//! Checks the marketplace manifest and every plugin directory, collecting
//! all problems instead of stopping at the first. Only presence, type and
//! path checks are made; manifests are inspected as raw JSON so that a
//! wrongly typed field is reported rather than failing deserialization.

use crate::report::PluginKind;
use crate::workspace::{PluginDirs, Workspace};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use skillpack_fs::{NormalizedPath, PluginPath, io, tree};
use skillpack_meta::schema::marketplace::REQUIRED_KEYS;

const PLUGIN_REQUIRED_KEYS: &[&str] = &["name", "version", "description"];

/// Errors and warnings found by a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Number of marketplace entries listed
    pub entries: usize,
    /// Number of plugin directories inspected
    pub plugins: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Fail when any error was recorded.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::ValidationFailed {
                count: self.errors.len(),
            })
        }
    }
}

pub struct MarketplaceValidator<'a> {
    workspace: &'a Workspace,
}

impl<'a> MarketplaceValidator<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_marketplace(&mut report);
        for kind in PluginKind::ALL {
            self.check_plugins(kind, &mut report);
        }
        tracing::info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validation finished"
        );
        report
    }

    fn check_marketplace(&self, report: &mut ValidationReport) {
        let path = self.workspace.marketplace_file();
        let Some(value) = read_json(&path, "marketplace.json", report) else {
            return;
        };
        let Some(market) = value.as_object() else {
            report.error("marketplace.json: top level must be an object");
            return;
        };

        for key in REQUIRED_KEYS {
            if !market.contains_key(*key) {
                report.error(format!("marketplace.json: Missing required field '{key}'"));
            }
        }

        match market.get("name") {
            Some(Value::String(name)) if name.is_empty() => {
                report.error("marketplace.json: 'name' cannot be empty")
            }
            Some(Value::String(_)) | None => {}
            Some(_) => report.error("marketplace.json: 'name' must be a string"),
        }

        match market.get("owner") {
            Some(Value::Object(owner)) => {
                if !owner.contains_key("name") {
                    report.error("marketplace.json: owner.name is required");
                }
                if !owner.contains_key("url") {
                    report.warn("marketplace.json: owner.url is recommended");
                }
            }
            Some(_) => report.error("marketplace.json: 'owner' must be an object"),
            None => {}
        }

        if market.get("metadata").is_some_and(|m| !m.is_object()) {
            report.error("marketplace.json: 'metadata' must be an object");
        }

        match market.get("plugins") {
            Some(Value::Array(entries)) => {
                report.entries = entries.len();
                for (index, entry) in entries.iter().enumerate() {
                    self.check_entry(index, entry, report);
                }
            }
            Some(_) => report.error("marketplace.json: 'plugins' must be an array"),
            None => {}
        }
    }

    fn check_entry(&self, index: usize, entry: &Value, report: &mut ValidationReport) {
        let Some(entry) = entry.as_object() else {
            report.error(format!("marketplace.json plugins[{index}]: entry must be an object"));
            return;
        };
        for key in ["name", "source"] {
            if !entry.contains_key(key) {
                report.error(format!("marketplace.json plugins[{index}]: Missing '{key}'"));
            }
        }

        let name = entry.get("name").and_then(Value::as_str).unwrap_or("unknown");
        match entry.get("source") {
            Some(Value::String(source)) if source.starts_with("./") => {
                let resolved = self.workspace.plugins_root().join(source);
                if !resolved.is_dir() {
                    report.error(format!("Plugin '{name}': Source path not found - {source}"));
                }
            }
            Some(Value::String(_)) | None => {}
            Some(_) => report.error(format!("Plugin '{name}': 'source' must be a string")),
        }
    }

    fn check_plugins(&self, kind: PluginKind, report: &mut ValidationReport) {
        let root = self.workspace.kind_root(kind);
        if !root.is_dir() {
            report.warn(match kind {
                PluginKind::Individual => "No individual plugins directory found",
                PluginKind::Bundle => "No bundles directory found",
            });
            return;
        }

        let names = match tree::list_dirs(&root) {
            Ok(names) => names,
            Err(e) => {
                report.error(format!("{root}: {e}"));
                return;
            }
        };
        for name in names {
            let dirs = self.workspace.plugin_dirs(kind, &name);
            tracing::debug!(plugin = %name, %kind, "validating plugin");
            report.plugins += 1;
            check_plugin(&name, &dirs, report);
        }
    }
}

fn read_json(path: &NormalizedPath, label: &str, report: &mut ValidationReport) -> Option<Value> {
    if !path.is_file() {
        report.error(format!("{label} not found"));
        return None;
    }
    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(e) => {
            report.error(format!("{label}: {e}"));
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            report.error(format!("{label}: Invalid JSON - {e}"));
            None
        }
    }
}

fn check_plugin(name: &str, dirs: &PluginDirs, report: &mut ValidationReport) {
    for dir in [PluginPath::MetaDir, PluginPath::SkillsDir] {
        if !dirs.root.join(dir.as_str()).is_dir() {
            report.error(format!("{name}: Missing required directory '{dir}'"));
        }
    }

    let skills = dirs.skills();
    if skills.is_dir() && tree::list_dirs(&skills).map(|d| d.is_empty()).unwrap_or(true) {
        report.error(format!("{name}: No skills found in skills/ directory"));
    }
    if !dirs.commands().is_dir() {
        report.warn(format!("{name}: No commands directory found"));
    }
    if !dirs.agents().is_dir() {
        report.warn(format!("{name}: No agents directory found"));
    }

    let Some(value) = read_json(&dirs.manifest(), &format!("{name}: plugin.json"), report) else {
        return;
    };
    let Some(manifest) = value.as_object() else {
        report.error(format!("{name}: plugin.json must be an object"));
        return;
    };

    for key in PLUGIN_REQUIRED_KEYS {
        if !manifest.contains_key(*key) {
            report.error(format!("{name}: plugin.json missing '{key}'"));
        }
    }

    match manifest.get("name") {
        Some(Value::String(declared)) if declared == name => {}
        Some(other) => report.error(format!(
            "{name}: plugin.json name {other} doesn't match directory name"
        )),
        None => {}
    }

    match manifest.get("version") {
        Some(Value::String(version)) => {
            if semver::Version::parse(version).is_err() {
                report.warn(format!("{name}: version '{version}' is not a semantic version"));
            }
        }
        Some(_) => report.error(format!("{name}: 'version' must be a string")),
        None => {}
    }

    check_path_fields(name, dirs, manifest, report);
}

fn check_path_fields(name: &str, dirs: &PluginDirs, manifest: &Map<String, Value>, report: &mut ValidationReport) {
    match manifest.get("skills") {
        Some(Value::String(path)) => check_dot_prefix(name, "skills", path, report),
        Some(Value::Array(paths)) => {
            for path in paths {
                match path.as_str() {
                    Some(path) => check_dot_prefix(name, "skills", path, report),
                    None => report.error(format!("{name}: 'skills' entries must be strings")),
                }
            }
        }
        Some(_) => report.error(format!("{name}: 'skills' must be a path or list of paths")),
        None => {}
    }

    for field in ["commands", "agents"] {
        match manifest.get(field) {
            Some(Value::Array(paths)) => {
                for path in paths {
                    let Some(path) = path.as_str() else {
                        report.error(format!("{name}: '{field}' entries must be strings"));
                        continue;
                    };
                    check_dot_prefix(name, field, path, report);
                    if !path.ends_with(".md") {
                        report.error(format!("{name}: '{field}' entry '{path}' must be a .md file"));
                    } else if !dirs.resolve(path).is_file() {
                        report.error(format!("{name}: '{field}' entry '{path}' not found"));
                    }
                }
            }
            Some(Value::String(dir)) => report.error(format!(
                "{name}: '{field}' must list .md files, found directory '{dir}' (run `skillpack fix`)"
            )),
            Some(_) => report.error(format!("{name}: '{field}' must be an array of .md paths")),
            None => {}
        }
    }
}

fn check_dot_prefix(name: &str, field: &str, path: &str, report: &mut ValidationReport) {
    if !path.starts_with("./") {
        report.error(format!("{name}: '{field}' path '{path}' must start with ./"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_with_errors_is_invalid() {
        let mut report = ValidationReport::default();
        report.warn("w");
        assert!(report.is_valid());
        report.error("e");
        assert!(!report.is_valid());
        assert!(matches!(report.into_result(), Err(Error::ValidationFailed { count: 1 })));
    }
}
