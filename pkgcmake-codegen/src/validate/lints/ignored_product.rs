//! Lint for products that produce no build unit.

use pkgcmake_graph::Graph;

use crate::validate::{Diagnostic, Lint, product_location};

/// Lint that notes products whose kind is not rendered.
pub struct IgnoredProductLint;

const NAME: &str = "ignored-product";

impl Lint for IgnoredProductLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        for package in &graph.packages {
            for product in package.products.iter().filter(|p| !p.kind.is_rendered()) {
                diagnostics.push(
                    Diagnostic::info(
                        NAME,
                        format!(
                            "{} product '{}' is not rendered",
                            product.kind.as_str(),
                            product.name
                        ),
                    )
                    .at(product_location(&package.identity, &product.name)),
                );
            }
        }
    }
}
