//! Lint for system-library targets without headers.

use pkgcmake_graph::{Graph, TargetKind};

use crate::validate::{Diagnostic, Lint, target_location};

/// Lint that warns when a system-library target has no include directory.
pub struct MissingIncludeDirLint;

const NAME: &str = "missing-include-dir";

impl Lint for MissingIncludeDirLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        for package in &graph.packages {
            for target in &package.targets {
                if target.kind == TargetKind::SystemLibrary && target.include_dir().is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            NAME,
                            format!(
                                "system-library target '{}' has no include directory",
                                target.name
                            ),
                        )
                        .at(target_location(&package.identity, &target.name)),
                    );
                }
            }
        }
    }
}
