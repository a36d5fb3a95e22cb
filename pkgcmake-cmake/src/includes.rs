//! Transitive C-family include directories of a target.

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use pkgcmake_graph::{Graph, Package, Resolved, Target};

/// Include directories of every C-family target reachable from `target`.
///
/// Target edges and the members of depended-on products are followed. The
/// result is sorted and deduplicated. Each target is visited once, so
/// cyclic graphs terminate.
pub(crate) fn native_include_dirs<'g>(
    graph: &'g Graph,
    package: &'g Package,
    target: &'g Target,
) -> BTreeSet<&'g Path> {
    let mut dirs = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut worklist = vec![(package, target)];
    visited.insert((package.identity.as_str(), target.name.as_str()));

    while let Some((owner, current)) = worklist.pop() {
        for dependency in &current.dependencies {
            let reached: Vec<(&Package, &Target)> = match owner.resolve(graph, dependency) {
                Resolved::Target(p, t) => vec![(p, t)],
                Resolved::Product(p, product) => product
                    .targets
                    .iter()
                    .filter_map(|member| p.target(member).map(|t| (p, t)))
                    .collect(),
                Resolved::Missing => Vec::new(),
            };

            for (p, t) in reached {
                if visited.insert((p.identity.as_str(), t.name.as_str())) {
                    if let Some(dir) = t.include_dir() {
                        dirs.insert(dir);
                    }
                    worklist.push((p, t));
                }
            }
        }
    }

    dirs
}
