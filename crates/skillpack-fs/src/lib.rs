//! Filesystem primitives for skillpack
//!
//! Normalized paths, atomic manifest writes, format-agnostic config
//! loading and the skill-tree copy used by the plugin generators.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod tree;

pub use config::ConfigStore;
pub use constants::PluginPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use tree::IgnoreSet;
