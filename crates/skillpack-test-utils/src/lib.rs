//! Shared test utilities for the skillpack workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`workspace`]: [`TestWorkspace`] builder for repositories holding
//!   skills and generated plugins

pub mod workspace;

pub use workspace::TestWorkspace;
