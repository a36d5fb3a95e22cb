//! CMake build-script generator for resolved package graphs.
//!
//! [`Generator`] walks every package of a [`Graph`](pkgcmake_graph::Graph)
//! and renders its targets and products into a single `CMakeLists.txt`.

mod context;
mod generator;
mod includes;
mod product;
mod target;

pub mod files;

pub use context::GenContext;
pub use generator::Generator;
pub use pkgcmake_core::{GenerateResult, PreviewFile};
pub use product::ProductRenderer;
pub use target::TargetRenderer;

/// Placeholder source for units without Swift sources.
pub(crate) const SWIFT_PLACEHOLDER: &str = "empty.swift";

/// Placeholder source for C-family targets without sources.
pub(crate) const CLANG_PLACEHOLDER: &str = "empty.c";

/// Object-file reference to a generated unit.
pub(crate) fn target_objects(name: &str) -> String {
    format!("$<TARGET_OBJECTS:{}>", name)
}
