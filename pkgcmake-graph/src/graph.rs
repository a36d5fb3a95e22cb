//! The resolved package graph.

use std::path::Path;

use serde::Deserialize;

use crate::{Dependency, Module, Product, Target};

/// A fully resolved package graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Graph {
    /// Packages in resolver order.
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// A package with its targets and products.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Package {
    /// Unique package identity.
    pub identity: String,
    /// Targets in declaration order.
    #[serde(default)]
    pub targets: Vec<Target>,
    /// Products in declaration order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Graph {
    /// Find a package by identity.
    pub fn package(&self, identity: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.identity == identity)
    }

    /// Find a product of a package.
    pub fn product(&self, package: &str, name: &str) -> Option<&Product> {
        self.package(package).and_then(|p| p.product(name))
    }

    /// Total number of targets across all packages.
    pub fn target_count(&self) -> usize {
        self.packages.iter().map(|p| p.targets.len()).sum()
    }

    /// Total number of products across all packages.
    pub fn product_count(&self) -> usize {
        self.packages.iter().map(|p| p.products.len()).sum()
    }

    /// Make every relative source and include path absolute against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for target in self.packages.iter_mut().flat_map(|p| p.targets.iter_mut()) {
            for source in &mut target.sources {
                if source.is_relative() {
                    *source = base.join(&*source);
                }
            }
            if let Module::Clang(clang) = &mut target.module {
                if clang.include_dir.is_relative() {
                    clang.include_dir = base.join(&clang.include_dir);
                }
            }
        }
    }
}

impl Package {
    /// Find a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Find a product by name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Resolve a dependency edge of one of this package's targets.
    ///
    /// Target edges resolve within this package, product edges within the
    /// package they name.
    pub fn resolve<'g>(&'g self, graph: &'g Graph, dependency: &Dependency) -> Resolved<'g> {
        match dependency {
            Dependency::Target { name, .. } => match self.target(name) {
                Some(target) => Resolved::Target(self, target),
                None => Resolved::Missing,
            },
            Dependency::Product { name, package, .. } => {
                match graph.package(package).and_then(|p| p.product(name).map(|pr| (p, pr))) {
                    Some((owner, product)) => Resolved::Product(owner, product),
                    None => Resolved::Missing,
                }
            }
        }
    }
}

/// Result of resolving a dependency edge.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'g> {
    /// A target together with its owning package.
    Target(&'g Package, &'g Target),
    /// A product together with its owning package.
    Product(&'g Package, &'g Product),
    /// The edge points outside the graph.
    Missing,
}
