//! Targets, their dependencies and build settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::LanguageStandard;

/// A compilable unit of a package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    /// Target name, unique within its package.
    pub name: String,
    /// What the target builds.
    pub kind: TargetKind,
    /// Source files in resolver order.
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    /// Dependencies in resolver order. Link order follows this list.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Build setting assignments declared on the target.
    #[serde(default)]
    pub settings: Vec<BuildSetting>,
    /// Implementing language.
    #[serde(default)]
    pub module: Module,
}

impl Target {
    /// Returns true for targets implemented in a C-family language.
    pub fn is_clang(&self) -> bool {
        matches!(self.module, Module::Clang(_))
    }

    /// Public include directory of a C-family target.
    pub fn include_dir(&self) -> Option<&Path> {
        match &self.module {
            Module::Clang(clang) => Some(&clang.include_dir),
            Module::Swift => None,
        }
    }

    /// Declared C-family language standard, if any.
    pub fn standard(&self) -> Option<LanguageStandard> {
        match &self.module {
            Module::Clang(clang) => clang.standard,
            Module::Swift => None,
        }
    }
}

/// Kind of build unit a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Library sources.
    Library,
    /// Executable sources, consumed by others only as object files.
    Executable,
    /// Header-only wrapper around a library installed on the system.
    SystemLibrary,
}

impl TargetKind {
    /// Returns the kind as written in graph documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Library => "library",
            TargetKind::Executable => "executable",
            TargetKind::SystemLibrary => "system-library",
        }
    }
}

/// Implementing language of a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "language", rename_all = "kebab-case")]
pub enum Module {
    /// Swift module.
    #[default]
    Swift,
    /// C, C++ or Objective-C module.
    Clang(ClangModule),
}

/// Native-language details of a C-family target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClangModule {
    /// Directory holding the target's public headers.
    pub include_dir: PathBuf,
    /// Declared language standard.
    #[serde(default)]
    pub standard: Option<LanguageStandard>,
}

/// An edge from a target to another target or to a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// A product, possibly from another package.
    Product {
        #[serde(rename = "product")]
        name: String,
        package: String,
        #[serde(default)]
        condition: Option<Condition>,
    },
    /// A target of the same package.
    Target {
        #[serde(rename = "target")]
        name: String,
        #[serde(default)]
        condition: Option<Condition>,
    },
}

impl Dependency {
    /// Name of the referenced target or product.
    pub fn name(&self) -> &str {
        match self {
            Dependency::Product { name, .. } | Dependency::Target { name, .. } => name,
        }
    }

    /// Condition attached to the edge.
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Dependency::Product { condition, .. } | Dependency::Target { condition, .. } => {
                condition.as_ref()
            }
        }
    }
}

/// Predicate restricting when an edge or setting applies.
///
/// Conditions are carried through the graph but not evaluated when
/// rendering build scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Condition {
    /// Platforms the condition holds on; empty means every platform.
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Build configuration the condition holds in.
    #[serde(default)]
    pub configuration: Option<BuildConfiguration>,
}

/// Build configuration named by a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildConfiguration {
    Debug,
    Release,
}

/// One build setting assignment on a target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildSetting {
    /// Setting category.
    pub kind: SettingKind,
    /// Assigned values in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
    /// Condition attached to the assignment.
    #[serde(default)]
    pub condition: Option<Condition>,
}

/// Build setting category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SettingKind {
    /// Swift active compilation conditions.
    ActiveCompilationConditions,
    /// Libraries to link against.
    LinkLibraries,
    /// Extra flags passed to the compiler.
    OtherCompilerFlags,
    /// Any category the build script renderer does not handle.
    Unsupported(String),
}

impl SettingKind {
    /// Returns the category as written in graph documents.
    pub fn as_str(&self) -> &str {
        match self {
            SettingKind::ActiveCompilationConditions => "active-compilation-conditions",
            SettingKind::LinkLibraries => "link-libraries",
            SettingKind::OtherCompilerFlags => "other-compiler-flags",
            SettingKind::Unsupported(other) => other,
        }
    }

    /// Returns true for categories that are rendered.
    pub fn is_supported(&self) -> bool {
        !matches!(self, SettingKind::Unsupported(_))
    }
}

impl From<String> for SettingKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active-compilation-conditions" => SettingKind::ActiveCompilationConditions,
            "link-libraries" => SettingKind::LinkLibraries,
            "other-compiler-flags" => SettingKind::OtherCompilerFlags,
            _ => SettingKind::Unsupported(s),
        }
    }
}
