//! Where outline resources come from.
//!
//! A resource is addressed by the decimal value of its character code, e.g.
//! `'A'` (65) lives at `<prefix>65`.

use std::collections::HashMap;
use std::io;

use crate::error::OutlineError;

/// Prefix used when no other location is configured.
pub const DEFAULT_PREFIX: &str = "assets/cmuntt/gly_";

/// A store of per-character outline resources.
pub trait OutlineSource {
    /// Human-readable location of the resource for `code`, used in
    /// diagnostics.
    fn locate(&self, code: u32) -> String;

    /// Reads the whole resource for `code`.
    fn read(&self, code: u32) -> Result<String, OutlineError>;
}

/// Outline files on disk, one file per character: `prefix + code`.
///
/// The prefix is concatenated verbatim, so it may end in a directory
/// separator (`glyphs/`) or in a file-name stem (`glyphs/gly_`).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    prefix: String,
}

impl DirectorySource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for DirectorySource {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl OutlineSource for DirectorySource {
    fn locate(&self, code: u32) -> String {
        format!("{}{}", self.prefix, code)
    }

    fn read(&self, code: u32) -> Result<String, OutlineError> {
        let path = self.locate(code);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(source) => Err(OutlineError::ResourceNotFound { code, path, source }),
        }
    }
}

/// Outline resources held in memory, keyed by character code.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<u32, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the resource for `ch`.
    pub fn insert(&mut self, ch: char, text: impl Into<String>) -> &mut Self {
        self.resources.insert(ch as u32, text.into());
        self
    }

    pub fn with(mut self, ch: char, text: impl Into<String>) -> Self {
        self.insert(ch, text);
        self
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl OutlineSource for MemorySource {
    fn locate(&self, code: u32) -> String {
        format!("memory:{code}")
    }

    fn read(&self, code: u32) -> Result<String, OutlineError> {
        self.resources
            .get(&code)
            .cloned()
            .ok_or_else(|| OutlineError::ResourceNotFound {
                code,
                path: self.locate(code),
                source: io::Error::new(io::ErrorKind::NotFound, "no such glyph in memory source"),
            })
    }
}

impl<S: OutlineSource + ?Sized> OutlineSource for &S {
    fn locate(&self, code: u32) -> String {
        (**self).locate(code)
    }

    fn read(&self, code: u32) -> Result<String, OutlineError> {
        (**self).read(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_source_appends_decimal_code() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = format!("{}/gly_", dir.path().display());
        std::fs::write(dir.path().join("gly_65"), "M 0 0 L 1 1").unwrap();

        let source = DirectorySource::new(prefix.clone());
        assert_eq!(source.locate(65), format!("{prefix}65"));
        assert_eq!(source.read('A' as u32).unwrap(), "M 0 0 L 1 1");
    }

    #[test]
    fn directory_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(format!("{}/gly_", dir.path().display()));
        match source.read(63) {
            Err(OutlineError::ResourceNotFound { code, path, source }) => {
                assert_eq!(code, 63);
                assert!(path.ends_with("gly_63"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ResourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_source_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("66"), b"M 1 2 \xff").unwrap();
        let source = DirectorySource::new(format!("{}/", dir.path().display()));
        let text = source.read(66).unwrap();
        assert!(text.starts_with("M 1 2 "));
    }

    #[test]
    fn memory_source_lookup() {
        let source = MemorySource::new().with('A', "M 0 0");
        assert_eq!(source.len(), 1);
        assert_eq!(source.read(65).unwrap(), "M 0 0");
        assert!(source.read(66).unwrap_err().is_missing());
    }

    #[test]
    fn default_prefix() {
        assert_eq!(DirectorySource::default().locate(72), "assets/cmuntt/gly_72");
    }
}
