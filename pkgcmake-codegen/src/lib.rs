//! Shared code generation utilities for pkgcmake.
//!
//! This crate provides the language-agnostic pieces used by the CMake
//! renderer and the command-line front-end.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text accumulation (CodeBuilder)
//! - [`naming`] - Generated identifiers, scopes and path escaping
//! - [`validate`] - Lints run over a resolved graph before generation

pub mod builder;
pub mod naming;
pub mod validate;
