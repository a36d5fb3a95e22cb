//! Generate operation - CMakeLists.txt from a resolved graph.

use std::path::Path;

use eyre::{Context, Result, bail};
use pkgcmake_cmake::{GenContext, Generator};
use pkgcmake_codegen::validate::{Severity, Validator};
use pkgcmake_graph::Graph;

use super::check::format_diagnostic;
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving `CMakeLists.txt`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Validates the graph first; error diagnostics abort before anything is
/// rendered or written.
pub fn generate(graph: &Graph, ctx: &GenContext, opts: GenerateOptions) -> Result<GenerateReport> {
    let validation = Validator::for_naming(ctx.naming()).run(graph);
    if validation.has_errors() {
        let errors: Vec<String> = validation
            .with_severity(Severity::Error)
            .map(format_diagnostic)
            .collect();
        bail!(
            "graph has {} error(s):\n{}",
            errors.len(),
            errors.join("\n")
        );
    }

    let warnings = validation
        .with_severity(Severity::Warning)
        .map(format_diagnostic)
        .collect();

    tracing::debug!(
        root = %ctx.root().display(),
        scope = ctx.naming().scope().unwrap_or(""),
        "generating build script"
    );

    let generator = Generator::new(graph, ctx);
    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview().wrap_err("Failed to render build script")?)
    } else {
        GenerationResult::Written(
            generator
                .generate(opts.output_dir)
                .wrap_err("Failed to generate build script")?,
        )
    };

    Ok(GenerateReport {
        packages: graph.packages.len(),
        targets: graph.target_count(),
        products: graph.product_count(),
        warnings,
        result,
    })
}
