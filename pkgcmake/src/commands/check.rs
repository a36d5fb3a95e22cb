use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pkgcmake_codegen::naming::NamingPolicy;
use pkgcmake_graph::Graph;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the graph document (defaults to ./graph.toml)
    #[arg(short, long, default_value = "graph.toml")]
    pub graph: PathBuf,

    /// Scope the graph will be generated with; enables alias checks
    #[arg(short, long)]
    pub scope: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let graph = Graph::from_file(&self.graph).unwrap_or_exit();
        let report = ops::check(
            &graph,
            &self.graph,
            &NamingPolicy::new(self.scope.clone()),
        );

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
