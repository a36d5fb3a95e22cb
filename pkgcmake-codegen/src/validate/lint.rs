//! Lint trait for graph validation.

use pkgcmake_graph::Graph;

use super::Diagnostic;

/// A lint that checks the resolved graph for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the graph and add any diagnostics.
    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>);
}
