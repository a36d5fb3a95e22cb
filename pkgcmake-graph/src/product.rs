//! Products exported by packages.

use serde::Deserialize;

/// A named, externally consumable artifact aggregating targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Product {
    /// Product name.
    pub name: String,
    /// Product kind.
    pub kind: ProductKind,
    /// Member target names, all from the owning package.
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Kind of artifact a product produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    /// Shared library.
    DynamicLibrary,
    /// Static library.
    StaticLibrary,
    /// Library whose linkage is left to the client.
    AutomaticLibrary,
    /// Executable.
    Executable,
    /// Build tool plugin.
    Plugin,
    /// Test bundle.
    Test,
    /// Code snippet.
    Snippet,
    /// Compiler macro.
    Macro,
}

impl ProductKind {
    /// Returns the kind as written in graph documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::DynamicLibrary => "dynamic-library",
            ProductKind::StaticLibrary => "static-library",
            ProductKind::AutomaticLibrary => "automatic-library",
            ProductKind::Executable => "executable",
            ProductKind::Plugin => "plugin",
            ProductKind::Test => "test",
            ProductKind::Snippet => "snippet",
            ProductKind::Macro => "macro",
        }
    }

    /// Returns true for every library kind.
    pub fn is_library(&self) -> bool {
        matches!(
            self,
            ProductKind::DynamicLibrary | ProductKind::StaticLibrary | ProductKind::AutomaticLibrary
        )
    }

    /// Returns true for kinds that produce a build unit.
    pub fn is_rendered(&self) -> bool {
        self.is_library() || matches!(self, ProductKind::Executable)
    }
}
