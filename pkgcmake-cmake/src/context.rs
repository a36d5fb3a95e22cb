use std::path::{Component, Path, PathBuf};

use eyre::{Result, eyre};
use pkgcmake_codegen::naming::{NamingPolicy, escape_path};

/// Settings shared by every render call of one generation run.
#[derive(Debug, Clone)]
pub struct GenContext {
    root: PathBuf,
    naming: NamingPolicy,
}

impl GenContext {
    /// Create a context rendering sources relative to `root`.
    pub fn new(root: impl Into<PathBuf>, naming: NamingPolicy) -> Self {
        Self {
            root: root.into(),
            naming,
        }
    }

    /// Directory the generated script lives in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn naming(&self) -> &NamingPolicy {
        &self.naming
    }

    /// Source path relative to the root, escaped and `/`-separated.
    pub fn relative_source(&self, source: &Path) -> Result<String> {
        let relative = pathdiff::diff_paths(source, &self.root)
            .filter(|p| p.is_relative())
            .ok_or_else(|| {
                eyre!(
                    "cannot express '{}' relative to '{}'",
                    source.display(),
                    self.root.display()
                )
            })?;

        let joined = relative
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Ok(escape_path(&joined))
    }
}
