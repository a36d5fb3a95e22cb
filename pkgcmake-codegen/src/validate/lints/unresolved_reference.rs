//! Lint for dependency edges and product members pointing outside the graph.

use pkgcmake_graph::{Dependency, Graph};

use crate::validate::{Diagnostic, Lint, product_location, target_location};

/// Lint that errors on references that do not resolve.
pub struct UnresolvedReferenceLint;

const NAME: &str = "unresolved-reference";

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        for package in &graph.packages {
            for target in &package.targets {
                for dependency in &target.dependencies {
                    let message = match dependency {
                        Dependency::Target { name, .. } if package.target(name).is_none() => {
                            format!(
                                "target '{}' depends on unknown target '{}' in package '{}'",
                                target.name, name, package.identity
                            )
                        }
                        Dependency::Product {
                            name,
                            package: owner,
                            ..
                        } if graph.product(owner, name).is_none() => {
                            format!(
                                "target '{}' depends on unknown product '{}' of package '{}'",
                                target.name, name, owner
                            )
                        }
                        _ => continue,
                    };
                    diagnostics.push(
                        Diagnostic::error(NAME, message)
                            .at(target_location(&package.identity, &target.name)),
                    );
                }
            }

            for product in &package.products {
                for member in &product.targets {
                    if package.target(member).is_none() {
                        diagnostics.push(
                            Diagnostic::error(
                                NAME,
                                format!(
                                    "product '{}' lists unknown target '{}'",
                                    product.name, member
                                ),
                            )
                            .at(product_location(&package.identity, &product.name)),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let graph: Graph = content.parse().expect("Failed to parse test graph");
        let mut diagnostics = Vec::new();
        UnresolvedReferenceLint.check(&graph, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_resolved_references() {
        let diagnostics = check(
            r#"
            [[packages]]
            identity = "log"

            [[packages.targets]]
            name = "Logging"
            kind = "library"

            [[packages.products]]
            name = "Logging"
            kind = "automatic-library"
            targets = ["Logging"]

            [[packages]]
            identity = "app"

            [[packages.targets]]
            name = "core"
            kind = "library"
            dependencies = [{ product = "Logging", package = "log" }]

            [[packages.targets]]
            name = "exe"
            kind = "executable"
            dependencies = [{ target = "core" }]
            "#,
        );

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_target_and_product() {
        let diagnostics = check(
            r#"
            [[packages]]
            identity = "app"

            [[packages.targets]]
            name = "exe"
            kind = "executable"
            dependencies = [{ target = "missing" }, { product = "Nope", package = "other" }]

            [[packages.products]]
            name = "app"
            kind = "executable"
            targets = ["ghost"]
            "#,
        );

        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity.is_error()));
        assert!(diagnostics[0].message.contains("unknown target 'missing'"));
        assert!(diagnostics[1].message.contains("unknown product 'Nope'"));
        assert_eq!(
            diagnostics[2].location.as_deref(),
            Some("packages.app.products.app")
        );
    }

    #[test]
    fn test_target_edges_do_not_cross_packages() {
        let diagnostics = check(
            r#"
            [[packages]]
            identity = "lib"

            [[packages.targets]]
            name = "core"
            kind = "library"

            [[packages]]
            identity = "app"

            [[packages.targets]]
            name = "exe"
            kind = "executable"
            dependencies = [{ target = "core" }]
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
    }
}
