//! Core utilities and types for pkgcmake.
//!
//! This crate provides the file-writing primitives shared by the
//! generator and the command-line front-end.

mod codegen;
mod file;

pub use codegen::{GenerateResult, PreviewFile};
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
