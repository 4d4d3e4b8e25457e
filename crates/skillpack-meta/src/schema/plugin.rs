//! `plugin.json` manifest.
//!
//! The manifest has gone through several shapes: `author` was once a bare
//! string, `repository` an `{type, url}` object, and `commands`/`agents`
//! bare directory strings. The field types below accept every historical
//! shape; [`PluginManifest::normalize`] migrates a manifest into the
//! canonical one the generators write.

use serde::{Deserialize, Serialize};
use skillpack_fs::path::ensure_dot_prefix;
use std::collections::BTreeMap;

/// Keys earlier generators wrote that the plugin loader does not recognise.
pub const LEGACY_KEYS: &[&str] = &["category", "bundle", "includes"];

/// Structured author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Keys beyond `name`, `email` and `url`, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Author {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email,
            url: None,
            extra: BTreeMap::new(),
        }
    }
}

/// `author`: either the legacy bare name or a structured author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Name(String),
    Detailed(Author),
}

impl AuthorField {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed(author) => &author.name,
        }
    }
}

/// Legacy `repository` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub url: String,
}

/// `repository`: canonical URL string or legacy object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Detailed(RepositoryInfo),
}

impl RepositoryField {
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Detailed(info) => &info.url,
        }
    }
}

/// Path field: a directory string or an explicit list of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Dir(String),
    Files(Vec<String>),
}

impl PathSpec {
    fn with_dot_prefix(&self) -> Self {
        match self {
            Self::Dir(dir) => Self::Dir(ensure_dot_prefix(dir)),
            Self::Files(files) => Self::Files(files.iter().map(|f| ensure_dot_prefix(f)).collect()),
        }
    }
}

/// A plugin manifest as found on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<PathSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<PathSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<PathSpec>,
    /// Keys this schema does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PluginManifest {
    /// A manifest with only a name; generators fill in the rest.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            description: None,
            author: None,
            license: None,
            homepage: None,
            repository: None,
            keywords: None,
            skills: None,
            commands: None,
            agents: None,
            extra: BTreeMap::new(),
        }
    }

    /// Migrate into the canonical shape.
    ///
    /// A `commands` or `agents` string naming a single `.md` file becomes a
    /// one-entry list. Any other string is passed to `discover`, which
    /// returns the `./<dir>/<file>.md` paths found there, or `None` when the
    /// string is not a directory. A directory with no markdown drops the
    /// field, as does a trailing-`/` directory that does not exist; other
    /// strings are kept with a `./` prefix.
    ///
    /// Returns a description of every change made; an empty list means the
    /// manifest was already canonical.
    pub fn normalize<F, E>(&mut self, author_email: Option<&str>, mut discover: F) -> Result<Vec<String>, E>
    where
        F: FnMut(&str) -> Result<Option<Vec<String>>, E>,
    {
        let mut changes = Vec::new();

        if let Some(AuthorField::Name(name)) = &self.author {
            self.author = Some(AuthorField::Detailed(Author::new(
                name.clone(),
                author_email.map(str::to_string),
            )));
            changes.push("author: string -> object".to_string());
        }

        if let Some(RepositoryField::Detailed(info)) = &self.repository {
            self.repository = Some(RepositoryField::Url(info.url.clone()));
            changes.push("repository: object -> url".to_string());
        }

        if let Some(skills) = &self.skills {
            let fixed = skills.with_dot_prefix();
            if &fixed != skills {
                self.skills = Some(fixed);
                changes.push("skills: added ./ prefix".to_string());
            }
        }

        for field in ["commands", "agents"] {
            let slot = match field {
                "commands" => &mut self.commands,
                _ => &mut self.agents,
            };
            match slot.take() {
                Some(PathSpec::Dir(file)) if file.ends_with(".md") => {
                    changes.push(format!("{field}: file '{file}' -> list"));
                    *slot = Some(PathSpec::Files(vec![ensure_dot_prefix(&file)]));
                }
                Some(PathSpec::Dir(dir)) => match discover(&dir)? {
                    Some(files) if files.is_empty() => {
                        changes.push(format!("{field}: dropped empty directory '{dir}'"));
                    }
                    Some(files) => {
                        changes.push(format!("{field}: directory -> {} file(s)", files.len()));
                        *slot = Some(PathSpec::Files(files));
                    }
                    None if dir.ends_with('/') => {
                        changes.push(format!("{field}: dropped missing directory '{dir}'"));
                    }
                    None => {
                        let fixed = ensure_dot_prefix(&dir);
                        if fixed != dir {
                            changes.push(format!("{field}: added ./ prefix"));
                        }
                        *slot = Some(PathSpec::Dir(fixed));
                    }
                },
                Some(files @ PathSpec::Files(_)) => {
                    let fixed = files.with_dot_prefix();
                    if fixed != files {
                        changes.push(format!("{field}: added ./ prefix"));
                    }
                    *slot = Some(fixed);
                }
                None => {}
            }
        }

        for key in LEGACY_KEYS {
            if self.extra.remove(*key).is_some() {
                changes.push(format!("removed legacy key '{key}'"));
            }
        }

        Ok(changes)
    }
}
