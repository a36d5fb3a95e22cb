//! Build-script emission building blocks.
//!
//! - [`CodeBuilder`] - Append-only text accumulator with scoped indentation

mod code_builder;

pub use code_builder::CodeBuilder;
