//! Generate command report data structures.

use pkgcmake_core::{GenerateResult, PreviewFile, WriteResult};

use super::output::{Output, Report};

/// Report data from build-script generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of packages rendered.
    pub packages: usize,
    /// Number of targets rendered.
    pub targets: usize,
    /// Number of products in the graph.
    pub products: usize,
    /// Warning messages from validation.
    pub warnings: Vec<String>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written (or already up to date).
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => {
                if !self.warnings.is_empty() {
                    out.newline();
                }
                let label = match written.write {
                    WriteResult::Written => "Generated",
                    WriteResult::Unchanged => "Up to date",
                };
                out.key_value(label, &written.path.display().to_string());
                out.preformatted(&format!(
                    "  {} packages, {} targets, {} products",
                    self.packages, self.targets, self.products
                ));
            }
            GenerationResult::Preview(file) => {
                out.divider(&file.path);
                out.preformatted(file.content.trim_end());
            }
        }
    }
}
