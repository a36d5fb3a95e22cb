//! Check operation - graph validation.

use std::path::Path;

use pkgcmake_codegen::{
    naming::NamingPolicy,
    validate::{Diagnostic, Severity, Validator},
};
use pkgcmake_graph::Graph;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the lints for `naming` over the graph and sorts diagnostics by
/// severity.
pub fn check(graph: &Graph, graph_path: &Path, naming: &NamingPolicy) -> CheckReport {
    let report = Validator::for_naming(naming).run(graph);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &report.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        graph_path: graph_path.to_path_buf(),
        packages: graph.packages.len(),
        targets: graph.target_count(),
        products: graph.product_count(),
        errors,
        warnings,
        infos,
    }
}

/// Message with its location on a second line.
pub(crate) fn format_diagnostic(diag: &Diagnostic) -> String {
    if let Some(loc) = &diag.location {
        format!("{}\n  --> {}", diag.message, loc)
    } else {
        diag.message.clone()
    }
}
