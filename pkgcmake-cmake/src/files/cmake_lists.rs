use std::path::{Path, PathBuf};

use eyre::Result;
use pkgcmake_codegen::builder::CodeBuilder;
use pkgcmake_core::{FileRules, GeneratedFile};
use pkgcmake_graph::Graph;

use crate::{GenContext, ProductRenderer, TargetRenderer};

/// File name of the generated build script.
pub const FILE_NAME: &str = "CMakeLists.txt";

/// The `CMakeLists.txt` covering a whole graph
pub struct CmakeLists<'a> {
    graph: &'a Graph,
    ctx: &'a GenContext,
}

impl<'a> CmakeLists<'a> {
    pub fn new(graph: &'a Graph, ctx: &'a GenContext) -> Self {
        Self { graph, ctx }
    }
}

impl GeneratedFile for CmakeLists<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::overwrite_if_changed()
    }

    fn render(&self) -> Result<String> {
        let targets = TargetRenderer::new(self.ctx, self.graph);
        let products = ProductRenderer::new(self.ctx);
        let mut out = CodeBuilder::cmake();

        for package in &self.graph.packages {
            tracing::debug!(
                package = %package.identity,
                targets = package.targets.len(),
                products = package.products.len(),
                "rendering package"
            );
            for target in &package.targets {
                targets.render(&mut out, package, target)?;
            }
            for product in &package.products {
                products.render(&mut out, package, product)?;
            }
        }

        Ok(out.build())
    }
}

#[cfg(test)]
mod tests {
    use pkgcmake_codegen::naming::NamingPolicy;
    use pkgcmake_core::WriteResult;

    use super::*;

    #[test]
    fn test_write_is_skipped_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let graph: Graph = r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "core"
            kind = "library"
            "#
        .parse()
        .unwrap();
        let ctx = GenContext::new(dir.path(), NamingPolicy::unscoped());
        let file = CmakeLists::new(&graph, &ctx);

        assert_eq!(file.write(dir.path()).unwrap(), WriteResult::Written);
        assert_eq!(file.write(dir.path()).unwrap(), WriteResult::Unchanged);
        assert!(dir.path().join(FILE_NAME).exists());
    }
}
