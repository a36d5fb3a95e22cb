//! Shared result types for build-script generators.

use std::path::PathBuf;

use crate::WriteResult;

/// Result of writing a generated build script
#[derive(Debug)]
pub struct GenerateResult {
    /// Absolute location of the written file
    pub path: PathBuf,
    /// Whether the file was rewritten or already up to date
    pub write: WriteResult,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
