//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from graph validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the graph document.
    pub graph_path: PathBuf,
    /// Number of packages in the graph.
    pub packages: usize,
    /// Number of targets across all packages.
    pub targets: usize,
    /// Number of products across all packages.
    pub products: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.graph_path.display()));
            out.preformatted(&format!(
                "  {} packages, {} targets, {} products",
                self.packages, self.targets, self.products
            ));
        }
    }
}
