//! `sha256:<hex>` digests for change detection.
//!
//! Rewriters render a file in memory and compare digests with what is on
//! disk, so an already-canonical file is never touched.

use crate::{Error, NormalizedPath, Result};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;

const PREFIX: &str = "sha256:";

/// Digest of raw bytes.
pub fn digest(bytes: &[u8]) -> String {
    format!("{PREFIX}{:x}", Sha256::digest(bytes))
}

/// Digest of a file, or `None` if it does not exist.
pub fn file_digest(path: &NormalizedPath) -> Result<Option<String>> {
    let native = path.to_native();
    match std::fs::read(&native) {
        Ok(bytes) => Ok(Some(digest(&bytes))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native, e)),
    }
}

/// Whether `path` already holds exactly `rendered`.
pub fn is_current(path: &NormalizedPath, rendered: &str) -> Result<bool> {
    Ok(file_digest(path)?.is_some_and(|on_disk| on_disk == digest(rendered.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_known_value() {
        assert_eq!(
            digest(b"hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn whitespace_changes_digest() {
        assert_ne!(digest(b"{}"), digest(b"{ }"));
    }

    #[test]
    fn is_current_compares_rendering_with_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("plugin.json"));
        std::fs::write(path.to_native(), "{\"name\": \"x\"}\n").unwrap();

        assert!(is_current(&path, "{\"name\": \"x\"}\n").unwrap());
        assert!(!is_current(&path, "{\n  \"name\": \"x\"\n}\n").unwrap());
    }

    #[test]
    fn missing_file_is_never_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("missing.json"));

        assert_eq!(file_digest(&path).unwrap(), None);
        assert!(!is_current(&path, "{}").unwrap());
    }
}
