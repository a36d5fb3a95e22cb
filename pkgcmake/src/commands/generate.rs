use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use pkgcmake_cmake::GenContext;
use pkgcmake_codegen::naming::NamingPolicy;
use pkgcmake_graph::Graph;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the graph document (defaults to ./graph.toml)
    #[arg(short, long, default_value = "graph.toml")]
    pub graph: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Directory source paths are made relative to (defaults to the output directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Prefix every generated name with this scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Print the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let graph = Graph::from_file(&self.graph).unwrap_or_exit();

        let root = self.root.as_ref().unwrap_or(&self.output);
        let root = std::path::absolute(root)
            .wrap_err_with(|| format!("Failed to resolve root '{}'", root.display()))?;
        let ctx = GenContext::new(root, NamingPolicy::new(self.scope.clone()));

        let report = ops::generate(
            &graph,
            &ctx,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
