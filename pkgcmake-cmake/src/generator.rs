use std::path::Path;

use eyre::Result;
use pkgcmake_core::{GenerateResult, GeneratedFile, PreviewFile, WriteResult};
use pkgcmake_graph::Graph;

use crate::{
    GenContext,
    files::{CmakeLists, FILE_NAME},
};

/// Generates the `CMakeLists.txt` of a resolved graph.
///
/// Every package is rendered in graph order, its targets first and then its
/// products, into one accumulator. Nothing is written unless rendering the
/// whole graph succeeds.
pub struct Generator<'a> {
    graph: &'a Graph,
    ctx: &'a GenContext,
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a Graph, ctx: &'a GenContext) -> Self {
        Self { graph, ctx }
    }

    /// Render the build script without writing it.
    pub fn render(&self) -> Result<String> {
        self.file().render()
    }

    /// Rendered file with its path relative to the output directory.
    pub fn preview(&self) -> Result<PreviewFile> {
        Ok(PreviewFile {
            path: FILE_NAME.to_string(),
            content: self.render()?,
        })
    }

    /// Write `CMakeLists.txt` into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.file();
        let path = file.path(output_dir);
        let write = file.write(output_dir)?;

        match write {
            WriteResult::Written => tracing::info!(path = %path.display(), "wrote build script"),
            WriteResult::Unchanged => {
                tracing::info!(path = %path.display(), "build script is up to date")
            }
        }

        Ok(GenerateResult { path, write })
    }

    fn file(&self) -> CmakeLists<'a> {
        CmakeLists::new(self.graph, self.ctx)
    }
}
