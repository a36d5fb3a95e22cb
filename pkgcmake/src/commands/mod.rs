mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on graph loading errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pkgcmake_graph::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pkgcmake")]
#[command(version)]
#[command(about = "Generate CMakeLists.txt from a resolved package graph")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render CMakeLists.txt from a graph document
    Generate(GenerateCommand),

    /// Validate a graph document without generating
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["pkgcmake", "check", "--graph", "g.toml", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "pkgcmake",
            "generate",
            "--graph",
            "deps/graph.json",
            "--scope",
            "pkg",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.graph.to_str(), Some("deps/graph.json"));
                assert_eq!(cmd.output.to_str(), Some("."));
                assert_eq!(cmd.scope.as_deref(), Some("pkg"));
                assert!(cmd.root.is_none());
                assert!(cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_check_accepts_scope() {
        let cli = Cli::try_parse_from(["pkgcmake", "check", "-s", "pkg"]).unwrap();
        match cli.command {
            Commands::Check(cmd) => assert_eq!(cmd.scope.as_deref(), Some("pkg")),
            _ => panic!("expected check"),
        }
    }
}
