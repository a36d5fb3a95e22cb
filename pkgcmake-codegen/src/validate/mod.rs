//! Validation of resolved graphs before generation.
//!
//! The generator assumes a well-formed graph. [`Validator`] runs a set of
//! [`Lint`]s that report invariant violations (errors) and constructs the
//! generator would silently drop (warnings and infos).

mod diagnostic;
mod lint;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub(crate) use diagnostic::{product_location, target_location};
pub use lint::Lint;
use lints::{
    AliasCollisionLint, DependencyCycleLint, DuplicateNameLint, IgnoredProductLint,
    MissingIncludeDirLint, UnresolvedReferenceLint, UnsupportedSettingLint,
};
use pkgcmake_graph::Graph;

use crate::naming::NamingPolicy;

/// Runs lints over a graph.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnresolvedReferenceLint),
                Box::new(DuplicateNameLint),
                Box::new(DependencyCycleLint),
                Box::new(UnsupportedSettingLint),
                Box::new(MissingIncludeDirLint),
                Box::new(IgnoredProductLint),
            ],
        }
    }

    /// Create a validator for a run using `naming`.
    ///
    /// Scoped runs emit `scope::name` aliases, which get their own
    /// collision check.
    pub fn for_naming(naming: &NamingPolicy) -> Self {
        let mut validator = Self::new();
        if naming.scope().is_some() {
            validator
                .lints
                .push(Box::new(AliasCollisionLint::new(naming.clone())));
        }
        validator
    }

    /// Run every lint over the graph.
    pub fn run(&self, graph: &Graph) -> ValidationReport {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(graph, &mut diagnostics);
            tracing::debug!(
                lint = lint.name(),
                found = diagnostics.len() - before,
                "lint finished"
            );
        }
        ValidationReport { diagnostics }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostics collected by a [`Validator`] run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Diagnostics of the given severity, in report order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}
