//! Individual plugin generation: one skill becomes one installable plugin.

use crate::report::{BatchReport, PluginKind};
use crate::templates::{self, Document};
use crate::workspace::{PluginDirs, Workspace};
use crate::{Error, Result};
use skillpack_fs::{IgnoreSet, NormalizedPath, PluginPath, io, tree};
use skillpack_meta::{Author, AuthorField, Catalog, PathSpec, PluginManifest, RepositoryField, Skill};

/// Manifest `skills` entry of every generated plugin.
pub const SKILLS_ENTRY: &str = "./skills/";

/// Summary of one generated plugin.
#[derive(Debug, Clone)]
pub struct GeneratedPlugin {
    pub name: String,
    pub dir: NormalizedPath,
    /// `./commands/*.md` entries written to the manifest
    pub commands: Vec<String>,
    /// `./agents/*.md` entries written to the manifest
    pub agents: Vec<String>,
}

/// Generates `plugins/individual/<skill>` from `<skills_root>/<skill>`.
pub struct PluginGenerator<'a> {
    workspace: &'a Workspace,
    ignore: IgnoreSet,
}

impl<'a> PluginGenerator<'a> {
    pub fn new(workspace: &'a Workspace) -> Result<Self> {
        let ignore = workspace.catalog().ignore_set()?;
        Ok(Self { workspace, ignore })
    }

    /// Regenerate the plugin for `slug` from scratch.
    ///
    /// The skill is read before anything is removed, so a broken skill
    /// leaves the previous plugin in place. The manifest is written last.
    pub fn generate(&self, slug: &str) -> Result<GeneratedPlugin> {
        let catalog = self.workspace.catalog();
        let skill = Skill::load(&self.workspace.skills_root(), slug)?;
        let dirs = self.workspace.plugin_dirs(PluginKind::Individual, slug);
        tracing::info!(skill = slug, target = %dirs.root, "generating plugin");

        prepare_plugin_dir(&dirs)?;

        let copied = tree::copy_tree(&skill.dir, &dirs.skills().join(slug), &self.ignore)?;
        tracing::debug!(skill = slug, files = copied, "copied skill content");

        let title = catalog.display_title(slug);
        for doc in templates::skill_commands(&skill, &title) {
            write_document(&dirs.commands(), &doc)?;
        }
        let agent = templates::skill_agent(slug, &title, catalog.family(slug));
        write_document(&dirs.agents(), &agent)?;

        let label = skill.frontmatter.name.as_deref().unwrap_or(slug);
        let description = skill
            .frontmatter
            .description
            .clone()
            .unwrap_or_else(|| format!("{label} skill for Claude Code"));
        let manifest = publisher_manifest(catalog, slug, description, catalog.tags(slug));

        finish_plugin(&dirs, manifest)
    }

    /// Skills `--all` packages: every non-hidden directory under the skills
    /// root that the catalog does not exclude, sorted.
    pub fn skill_names(&self) -> Result<Vec<String>> {
        let root = self.workspace.skills_root();
        if !root.is_dir() {
            return Err(Error::MissingDirectory {
                path: root.to_native(),
            });
        }
        let catalog = self.workspace.catalog();
        Ok(tree::list_dirs(&root)?
            .into_iter()
            .filter(|name| !catalog.is_excluded(name))
            .collect())
    }

    /// Generate every skill, continuing past failures.
    pub fn generate_all(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for slug in self.skill_names()? {
            match self.generate(&slug) {
                Ok(_) => report.succeeded.push(slug),
                Err(e) => {
                    tracing::error!(skill = %slug, error = %e, "plugin generation failed");
                    report.failed.push((slug, e.to_string()));
                }
            }
        }
        Ok(report)
    }
}

/// Remove any previous plugin tree and lay out the empty directories.
pub(crate) fn prepare_plugin_dir(dirs: &PluginDirs) -> Result<()> {
    tree::remove_dir_if_exists(&dirs.root)?;
    for dir in [dirs.meta_dir(), dirs.skills(), dirs.commands(), dirs.agents()] {
        tree::ensure_dir(&dir)?;
    }
    Ok(())
}

pub(crate) fn write_document(dir: &NormalizedPath, doc: &Document) -> Result<()> {
    io::write_text(&dir.join(&doc.file_name), &doc.content)?;
    tracing::debug!(file = %doc.file_name, "wrote {}", dir.file_name().unwrap_or_default());
    Ok(())
}

/// Canonical manifest stamped with the catalog publisher.
pub(crate) fn publisher_manifest(
    catalog: &Catalog,
    name: &str,
    description: String,
    keywords: Vec<String>,
) -> PluginManifest {
    let publisher = &catalog.publisher;
    let mut manifest = PluginManifest::named(name);
    manifest.version = Some(publisher.version.clone());
    manifest.description = Some(description);
    manifest.author = Some(AuthorField::Detailed(Author::new(
        publisher.name.clone(),
        publisher.email.clone(),
    )));
    manifest.license = Some(publisher.license.clone());
    manifest.homepage = publisher.homepage.clone();
    manifest.repository = publisher.repository.clone().map(RepositoryField::Url);
    manifest.keywords = Some(keywords);
    manifest.skills = Some(PathSpec::Dir(SKILLS_ENTRY.to_string()));
    manifest
}

/// List the generated commands and agents into the manifest and write it.
pub(crate) fn finish_plugin(dirs: &PluginDirs, mut manifest: PluginManifest) -> Result<GeneratedPlugin> {
    let commands = dirs.markdown_entries(PluginPath::CommandsDir.as_str())?;
    let agents = dirs.markdown_entries(PluginPath::AgentsDir.as_str())?;
    manifest.commands = file_list(&commands);
    manifest.agents = file_list(&agents);

    io::write_json(&dirs.manifest(), &manifest)?;
    tracing::info!(
        plugin = %manifest.name,
        commands = commands.len(),
        agents = agents.len(),
        "wrote plugin.json"
    );

    Ok(GeneratedPlugin {
        name: manifest.name,
        dir: dirs.root.clone(),
        commands,
        agents,
    })
}

fn file_list(entries: &[String]) -> Option<PathSpec> {
    if entries.is_empty() {
        None
    } else {
        Some(PathSpec::Files(entries.to_vec()))
    }
}
