//! Lint for library aliases that collide under a scope.

use indexmap::IndexMap;
use pkgcmake_graph::{Graph, TargetKind};

use crate::{
    naming::NamingPolicy,
    validate::{Diagnostic, Lint, product_location, target_location},
};

/// Lint that errors when two library units would get the same
/// `scope::name` alias.
///
/// Aliases use the bare target or product name, so a library target and a
/// library product of the same name collide, as do same-named library
/// targets in different packages. Only registered for scoped runs.
pub struct AliasCollisionLint {
    naming: NamingPolicy,
}

const NAME: &str = "alias-collision";

impl AliasCollisionLint {
    pub fn new(naming: NamingPolicy) -> Self {
        Self { naming }
    }
}

impl Lint for AliasCollisionLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: IndexMap<String, String> = IndexMap::new();

        for package in &graph.packages {
            let targets = package
                .targets
                .iter()
                .filter(|t| t.kind != TargetKind::Executable)
                .map(|t| (t.name.as_str(), target_location(&package.identity, &t.name)));
            let products = package
                .products
                .iter()
                .filter(|p| p.kind.is_library())
                .map(|p| (p.name.as_str(), product_location(&package.identity, &p.name)));

            for (base, location) in targets.chain(products) {
                let Some(alias) = self.naming.alias_name(base) else {
                    return;
                };
                if let Some(first) = seen.get(&alias) {
                    diagnostics.push(
                        Diagnostic::error(
                            NAME,
                            format!("alias '{}' is already used by {}", alias, first),
                        )
                        .at(location),
                    );
                } else {
                    seen.insert(alias, location);
                }
            }
        }
    }
}
