//! Metadata for skillpack.
//!
//! Typed schemas for `SKILL.md` frontmatter, `plugin.json`,
//! `marketplace.json`, and the catalog that drives plugin generation.

pub mod catalog;
pub mod error;
pub mod schema;
pub mod skill;

pub use catalog::{BundleDefinition, Catalog, CategoryFamily, LayoutConfig, Publisher};
pub use error::{Error, Result};
pub use schema::{
    Author, AuthorField, MarketplaceEntry, MarketplaceManifest, PathSpec, PluginManifest,
    RepositoryField,
};
pub use skill::{Skill, SkillFrontmatter, title_case};
