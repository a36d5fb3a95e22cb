//! Lint for build units that would share a generated name.

use indexmap::IndexMap;
use pkgcmake_graph::Graph;

use crate::{
    naming::NamingPolicy,
    validate::{Diagnostic, Lint, product_location, target_location},
};

/// Lint that errors when two build units map to the same generated name.
///
/// Scoping prefixes every name the same way, so collisions are checked on
/// unscoped names. Aliases are checked separately by
/// [`AliasCollisionLint`](super::AliasCollisionLint).
pub struct DuplicateNameLint;

const NAME: &str = "duplicate-name";

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: IndexMap<String, String> = IndexMap::new();

        for package in &graph.packages {
            let units = package
                .targets
                .iter()
                .map(|t| {
                    (
                        NamingPolicy::target_gen_name(&package.identity, &t.name),
                        target_location(&package.identity, &t.name),
                    )
                })
                .chain(package.products.iter().filter(|p| p.kind.is_rendered()).map(|p| {
                    (
                        NamingPolicy::product_gen_name(&p.name),
                        product_location(&package.identity, &p.name),
                    )
                }));

            for (name, location) in units {
                if let Some(first) = seen.get(&name) {
                    diagnostics.push(
                        Diagnostic::error(
                            NAME,
                            format!("generated name '{}' is already used by {}", name, first),
                        )
                        .at(location),
                    );
                } else {
                    seen.insert(name, location);
                }
            }
        }
    }
}
