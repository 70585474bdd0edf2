//! Shared utilities

pub mod file_io;

pub use file_io::{default_program_source, ByteSource, FileKind, FileSource, StaticSource};
