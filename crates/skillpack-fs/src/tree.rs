//! Directory-tree helpers: skill copies and markdown discovery.

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// File-name patterns excluded when copying a skill into a plugin.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<glob::Pattern>,
}

impl IgnoreSet {
    /// Compile shell-style patterns (`*.zip`, `.DS_Store`).
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p.as_ref()).map_err(|e| Error::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True if a single file or directory name matches any pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

fn walk_error(err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
    Error::io(path, source)
}

/// Recursively copy `src` into `dst`, skipping entries whose name matches
/// `ignore`. Existing files at the destination are overwritten.
///
/// Returns the number of files copied.
pub fn copy_tree(src: &NormalizedPath, dst: &NormalizedPath, ignore: &IgnoreSet) -> Result<usize> {
    let src_native = src.to_native();
    let dst_native = dst.to_native();
    let mut copied = 0;

    let walker = WalkDir::new(&src_native)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry: &DirEntry| {
            entry.depth() == 0 || !ignore.is_ignored(&entry.file_name().to_string_lossy())
        });

    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        let relative = entry
            .path()
            .strip_prefix(&src_native)
            .map_err(|e| Error::io(entry.path(), std::io::Error::other(e)))?;
        let target = dst_native.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
            copied += 1;
        }
    }

    tracing::debug!(src = %src, dst = %dst, files = copied, "copied tree");
    Ok(copied)
}

/// Copy a single file, creating the destination's parent directory.
pub fn copy_file(src: &NormalizedPath, dst: &NormalizedPath) -> Result<()> {
    let target = dst.to_native();
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::copy(src.to_native(), &target).map_err(|e| Error::io(&target, e))?;
    Ok(())
}

/// Files directly inside `dir` with the given extension, sorted by name.
///
/// A missing directory yields an empty list.
pub fn list_files(dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<NormalizedPath> = WalkDir::new(dir.to_native())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(walk_error))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| NormalizedPath::new(entry.path()))
        .filter(|path| path.extension() == Some(extension))
        .collect();
    files.sort();
    Ok(files)
}

/// Immediate subdirectory names of `dir`, sorted. Hidden directories are skipped.
pub fn list_dirs(dir: &NormalizedPath) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?
            .is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_dir && !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Remove a directory tree if it exists.
pub fn remove_dir_if_exists(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    if native.exists() {
        fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))?;
    }
    Ok(())
}

/// Create a directory and all of its parents.
pub fn ensure_dir(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_set_matches_names() {
        let ignore = IgnoreSet::new(&["*.zip", ".DS_Store"]).unwrap();
        assert!(ignore.is_ignored("bundle.zip"));
        assert!(ignore.is_ignored(".DS_Store"));
        assert!(!ignore.is_ignored("SKILL.md"));
    }

    #[test]
    fn ignore_set_rejects_bad_pattern() {
        assert!(IgnoreSet::new(&["[unclosed"]).is_err());
    }
}
