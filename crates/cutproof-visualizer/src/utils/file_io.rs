//! File I/O and source abstraction
//!
//! Byte sources feed the resource loads: files on disk and the embedded
//! default assets implement the same capability, so the lifecycle manager
//! treats explicit and default inputs identically. Extension
//! classification backs the upload validation boundary.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default program, substituted when no G-code file is selected.
pub const DEFAULT_PROGRAM_GCODE: &str = include_str!("../../assets/default.gcode");

/// Supported input kinds, classified by file extension
/// (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Part model mesh (`.stl`)
    PartModel,
    /// Cutting program (`.gcode`)
    Program,
}

impl FileKind {
    /// Classify a path by its extension. Returns `None` for anything that
    /// is neither an `.stl` nor a `.gcode` file.
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "stl" => Some(FileKind::PartModel),
            "gcode" => Some(FileKind::Program),
            _ => None,
        }
    }
}

/// Capability that produces the raw bytes of an input source.
///
/// Reads are the only suspension points in the system; a failure here
/// surfaces as a source-read error at the lifecycle boundary.
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Human-readable name of the source, used in errors and logs.
    fn describe(&self) -> String;

    /// Retrieve the source bytes.
    async fn read(&self) -> io::Result<Vec<u8>>;
}

/// A source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path. Existence is checked at read
    /// time, not construction.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ByteSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

/// A source backed by embedded bytes (default assets, tests).
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: &'static str,
    bytes: &'static [u8],
}

impl StaticSource {
    /// Create a source over embedded bytes.
    pub fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, bytes }
    }
}

#[async_trait]
impl ByteSource for StaticSource {
    fn describe(&self) -> String {
        self.name.to_string()
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.to_vec())
    }
}

/// The default program as a byte source.
pub fn default_program_source() -> StaticSource {
    StaticSource::new("default program", DEFAULT_PROGRAM_GCODE.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            FileKind::from_path(Path::new("part.STL")),
            Some(FileKind::PartModel)
        );
        assert_eq!(
            FileKind::from_path(Path::new("job.GCode")),
            Some(FileKind::Program)
        );
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(FileKind::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn default_program_is_nonempty() {
        assert!(!DEFAULT_PROGRAM_GCODE.trim().is_empty());
        assert!(DEFAULT_PROGRAM_GCODE.contains("G1"));
    }
}
