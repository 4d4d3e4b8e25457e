//! Migration of plugin manifests written in older schema shapes.

use crate::report::PluginKind;
use crate::workspace::{PluginDirs, Workspace};
use crate::Result;
use serde::Serialize;
use skillpack_fs::{ConfigStore, checksum, io, tree};
use skillpack_meta::PluginManifest;

/// What happened to one plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FixOutcome {
    /// Already canonical; left byte-identical
    Unchanged,
    /// Rewritten (or would be, on a dry run)
    Fixed { changes: Vec<String> },
    /// Directory has no `plugin.json`
    Skipped,
    /// Manifest could not be read or parsed
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedPlugin {
    pub name: String,
    pub kind: PluginKind,
    pub outcome: FixOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FixReport {
    pub plugins: Vec<FixedPlugin>,
    pub dry_run: bool,
}

impl FixReport {
    pub fn fixed_count(&self) -> usize {
        self.count(|o| matches!(o, FixOutcome::Fixed { .. }))
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(|o| matches!(o, FixOutcome::Unchanged))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FixOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FixOutcome) -> bool) -> usize {
        self.plugins.iter().filter(|p| pred(&p.outcome)).count()
    }
}

pub struct ManifestFixer<'a> {
    workspace: &'a Workspace,
    dry_run: bool,
}

impl<'a> ManifestFixer<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            dry_run: false,
        }
    }

    /// Report changes without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fix every manifest under `individual/` then `bundles/`.
    pub fn fix_all(&self) -> Result<FixReport> {
        let mut report = FixReport {
            dry_run: self.dry_run,
            ..Default::default()
        };
        for kind in PluginKind::ALL {
            for name in tree::list_dirs(&self.workspace.kind_root(kind))? {
                let dirs = self.workspace.plugin_dirs(kind, &name);
                let outcome = match self.fix(&dirs) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        tracing::error!(plugin = %name, error = %e, "cannot fix manifest");
                        FixOutcome::Failed {
                            message: e.to_string(),
                        }
                    }
                };
                report.plugins.push(FixedPlugin { name, kind, outcome });
            }
        }
        Ok(report)
    }

    /// Fix one plugin's manifest.
    ///
    /// The canonical rendering is compared with the file on disk by checksum
    /// and written only when they differ.
    pub fn fix(&self, dirs: &PluginDirs) -> Result<FixOutcome> {
        let path = dirs.manifest();
        if !path.is_file() {
            tracing::debug!(plugin = dirs.name(), "no plugin.json, skipping");
            return Ok(FixOutcome::Skipped);
        }

        let content = io::read_text(&path)?;
        let mut manifest: PluginManifest = ConfigStore::new().parse(&path, &content)?;
        let email = self.workspace.catalog().publisher.email.as_deref();
        let mut changes = manifest.normalize(email, |dir| {
            if dirs.resolve(dir).is_dir() {
                dirs.markdown_entries(dir).map(Some)
            } else {
                Ok(None)
            }
        })?;

        let rendered = io::render_json(&path, &manifest)?;
        if checksum::is_current(&path, &rendered)? {
            return Ok(FixOutcome::Unchanged);
        }
        if changes.is_empty() {
            changes.push("reformatted".to_string());
        }

        if self.dry_run {
            tracing::info!(plugin = dirs.name(), ?changes, "would fix manifest");
        } else {
            io::write_text(&path, &rendered)?;
            tracing::info!(plugin = dirs.name(), ?changes, "fixed manifest");
        }
        Ok(FixOutcome::Fixed { changes })
    }
}
