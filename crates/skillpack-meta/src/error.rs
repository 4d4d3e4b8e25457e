//! Error types for skillpack-meta

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] skillpack_fs::Error),

    #[error("Skill not found: {name} (looked in {path})")]
    SkillNotFound { name: String, path: PathBuf },

    #[error("SKILL.md not found in {path}")]
    MissingSkillFile { path: PathBuf },

    #[error("No YAML frontmatter found in {path}")]
    MissingFrontmatter { path: PathBuf },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Built-in catalog is malformed: {0}")]
    BuiltinCatalog(#[from] toml::de::Error),
}
