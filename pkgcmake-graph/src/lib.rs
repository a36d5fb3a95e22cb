//! Resolved package graph model for pkgcmake.
//!
//! The graph is produced by an external dependency resolver and handed to
//! the generator fully resolved. This crate defines its types and loads
//! serialized graph documents (TOML or JSON).
//!
//! # Architecture
//!
//! ```text
//! resolver → graph document → pkgcmake-graph (loading) → pkgcmake-cmake (rendering)
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod graph;
mod parse;
mod product;
mod standard;
mod target;

pub use error::{Error, Result};
pub use graph::{Graph, Package, Resolved};
pub use parse::Format;
pub use product::{Product, ProductKind};
pub use standard::{LanguageStandard, StandardFamily, StandardParseError};
pub use target::{
    BuildConfiguration, BuildSetting, ClangModule, Condition, Dependency, Module, SettingKind,
    Target, TargetKind,
};
