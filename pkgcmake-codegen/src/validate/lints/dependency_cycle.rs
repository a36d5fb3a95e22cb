//! Lint for cycles in the target dependency graph.

use std::collections::HashMap;

use pkgcmake_graph::{Graph, Package, Resolved, Target};

use crate::validate::{Diagnostic, Lint, target_location};

/// Lint that warns about target dependency cycles.
///
/// Generation terminates on cyclic graphs, but the resulting link
/// relationships are rarely what the package author intended.
pub struct DependencyCycleLint;

const NAME: &str = "dependency-cycle";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

type Node<'g> = (&'g Package, &'g Target);

impl Lint for DependencyCycleLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        let mut state = HashMap::new();

        for package in &graph.packages {
            for target in &package.targets {
                walk(graph, (package, target), &mut state, diagnostics);
            }
        }
    }
}

fn key<'g>((package, target): Node<'g>) -> (&'g str, &'g str) {
    (package.identity.as_str(), target.name.as_str())
}

fn successors<'g>(graph: &'g Graph, (package, target): Node<'g>) -> Vec<Node<'g>> {
    let mut next = Vec::new();
    for dependency in &target.dependencies {
        match package.resolve(graph, dependency) {
            Resolved::Target(owner, dep) => next.push((owner, dep)),
            Resolved::Product(owner, product) => next.extend(
                product
                    .targets
                    .iter()
                    .filter_map(|member| owner.target(member).map(|t| (owner, t))),
            ),
            Resolved::Missing => {}
        }
    }
    next
}

/// Depth-first walk from `root` with an explicit stack.
///
/// Each frame holds a node, its successors and the index of the next one to
/// follow. The frames on the stack are the current path.
fn walk<'g>(
    graph: &'g Graph,
    root: Node<'g>,
    state: &mut HashMap<(&'g str, &'g str), Visit>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if state.contains_key(&key(root)) {
        return;
    }

    state.insert(key(root), Visit::InProgress);
    let mut stack = vec![(root, successors(graph, root), 0)];

    while let Some((node, next, index)) = stack.last_mut() {
        let Some(&child) = next.get(*index) else {
            state.insert(key(*node), Visit::Done);
            stack.pop();
            continue;
        };
        *index += 1;

        match state.get(&key(child)) {
            Some(Visit::Done) => {}
            Some(Visit::InProgress) => {
                let start = stack
                    .iter()
                    .position(|(n, _, _)| key(*n) == key(child))
                    .unwrap_or(0);
                let cycle: Vec<String> = stack[start..]
                    .iter()
                    .map(|(n, _, _)| key(*n))
                    .chain(std::iter::once(key(child)))
                    .map(|(p, t)| format!("{}/{}", p, t))
                    .collect();
                diagnostics.push(
                    Diagnostic::warning(NAME, format!("dependency cycle: {}", cycle.join(" -> ")))
                        .at(target_location(&child.0.identity, &child.1.name)),
                );
            }
            None => {
                state.insert(key(child), Visit::InProgress);
                stack.push((child, successors(graph, child), 0));
            }
        }
    }
}
