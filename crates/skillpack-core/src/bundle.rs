//! Bundle generation: several catalog skills packaged as one plugin.

use crate::plugin::{finish_plugin, prepare_plugin_dir, publisher_manifest, write_document};
use crate::report::{BatchReport, PluginKind};
use crate::templates;
use crate::workspace::{PluginDirs, Workspace};
use crate::{Error, Result};
use skillpack_fs::{IgnoreSet, NormalizedPath, tree};
use skillpack_meta::{Error as MetaError, Skill};

/// Summary of one generated bundle.
#[derive(Debug, Clone)]
pub struct GeneratedBundle {
    pub name: String,
    pub dir: NormalizedPath,
    /// Member skills that were packaged
    pub included: Vec<String>,
    /// Member skills missing from the skills root
    pub missing: Vec<String>,
    pub commands: Vec<String>,
    pub agents: Vec<String>,
}

/// Generates `plugins/bundles/<key>` from a catalog bundle definition.
pub struct BundleGenerator<'a> {
    workspace: &'a Workspace,
    ignore: IgnoreSet,
}

impl<'a> BundleGenerator<'a> {
    pub fn new(workspace: &'a Workspace) -> Result<Self> {
        let ignore = workspace.catalog().ignore_set()?;
        Ok(Self { workspace, ignore })
    }

    pub fn generate(&self, key: &str) -> Result<GeneratedBundle> {
        let catalog = self.workspace.catalog();
        let bundle = catalog.bundle(key).ok_or_else(|| Error::UnknownBundle {
            name: key.to_string(),
            available: catalog.bundle_keys().into_iter().map(str::to_string).collect(),
        })?;

        let dirs = self.workspace.plugin_dirs(PluginKind::Bundle, key);
        tracing::info!(bundle = key, skills = ?bundle.skills, "generating bundle");

        // Members are loaded before the old bundle is removed.
        let skills_root = self.workspace.skills_root();
        let mut members = Vec::new();
        let mut missing = Vec::new();
        for member in &bundle.skills {
            if !skills_root.join(member).is_dir() {
                tracing::warn!(bundle = key, skill = %member, "skill not found, skipping");
                missing.push(member.clone());
                continue;
            }
            let skill = match self.individual(member) {
                Some(_) => None,
                None => self.load_member(key, member)?,
            };
            members.push((member.as_str(), skill));
        }

        prepare_plugin_dir(&dirs)?;
        for (member, _) in &members {
            tree::copy_tree(&skills_root.join(member), &dirs.skills().join(member), &self.ignore)?;
        }

        for (member, skill) in &members {
            self.aggregate_commands(&dirs, member, skill.as_ref())?;
        }

        write_document(&dirs.agents(), &templates::integration_agent(key, bundle))?;
        for (member, _) in &members {
            self.aggregate_agents(&dirs, member)?;
        }
        let included = members.iter().map(|(member, _)| member.to_string()).collect();

        let manifest = publisher_manifest(catalog, key, bundle.description.clone(), bundle.tags.clone());
        let plugin = finish_plugin(&dirs, manifest)?;

        Ok(GeneratedBundle {
            name: plugin.name,
            dir: plugin.dir,
            included,
            missing,
            commands: plugin.commands,
            agents: plugin.agents,
        })
    }

    /// Generate every catalog bundle in catalog order, continuing past failures.
    pub fn generate_all(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for key in self.workspace.catalog().bundle_keys() {
            match self.generate(key) {
                Ok(_) => report.succeeded.push(key.to_string()),
                Err(e) => {
                    tracing::error!(bundle = key, error = %e, "bundle generation failed");
                    report.failed.push((key.to_string(), e.to_string()));
                }
            }
        }
        Ok(report)
    }

    /// The member's individual plugin, if it has been generated.
    fn individual(&self, member: &str) -> Option<PluginDirs> {
        let dirs = self.workspace.plugin_dirs(PluginKind::Individual, member);
        dirs.manifest().is_file().then_some(dirs)
    }

    /// Load a member that has no individual plugin. A member without a
    /// readable `SKILL.md` is still packaged, but gets no commands.
    fn load_member(&self, key: &str, member: &str) -> Result<Option<Skill>> {
        match Skill::load(&self.workspace.skills_root(), member) {
            Ok(skill) => Ok(Some(skill)),
            Err(e @ (MetaError::MissingSkillFile { .. } | MetaError::MissingFrontmatter { .. })) => {
                tracing::warn!(bundle = key, skill = member, error = %e, "skipping member commands");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Member commands land as `<skill>-<command>.md`.
    fn aggregate_commands(&self, dirs: &PluginDirs, member: &str, skill: Option<&Skill>) -> Result<()> {
        if let Some(individual) = self.individual(member) {
            for file in tree::list_files(&individual.commands(), "md")? {
                let name = file.file_name().unwrap_or_default();
                tree::copy_file(&file, &dirs.commands().join(&format!("{member}-{name}")))?;
            }
            return Ok(());
        }

        let Some(skill) = skill else {
            return Ok(());
        };
        tracing::debug!(skill = member, "no individual plugin, rendering commands");
        let title = self.workspace.catalog().display_title(member);
        for mut doc in templates::skill_commands(skill, &title) {
            doc.file_name = format!("{member}-{}", doc.file_name);
            write_document(&dirs.commands(), &doc)?;
        }
        Ok(())
    }

    /// Member agents keep their names; a later member overwrites an earlier one.
    fn aggregate_agents(&self, dirs: &PluginDirs, member: &str) -> Result<()> {
        if let Some(individual) = self.individual(member) {
            for file in tree::list_files(&individual.agents(), "md")? {
                let name = file.file_name().unwrap_or_default();
                tree::copy_file(&file, &dirs.agents().join(name))?;
            }
            return Ok(());
        }

        let catalog = self.workspace.catalog();
        let title = catalog.display_title(member);
        let agent = templates::skill_agent(member, &title, catalog.family(member));
        write_document(&dirs.agents(), &agent)
    }
}
