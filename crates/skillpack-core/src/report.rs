//! Report types shared by the batch commands

use serde::Serialize;

/// Where a plugin lives under the plugins root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    Individual,
    Bundle,
}

impl PluginKind {
    pub const ALL: [PluginKind; 2] = [PluginKind::Individual, PluginKind::Bundle];

    /// Directory name under the plugins root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Individual => skillpack_fs::PluginPath::IndividualDir.as_str(),
            Self::Bundle => skillpack_fs::PluginPath::BundlesDir.as_str(),
        }
    }
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Bundle => write!(f, "bundle"),
        }
    }
}

/// Outcome of an `--all` run: one entry per item attempted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    /// Item name and the error message it failed with.
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Convert a run with failures into an error for the exit code.
    pub fn into_result(self, what: &str) -> crate::Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(crate::Error::BatchFailed {
                what: what.to_string(),
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}
