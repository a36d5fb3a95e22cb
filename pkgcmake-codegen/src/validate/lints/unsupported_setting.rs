//! Lint for build settings the generator does not render.

use pkgcmake_graph::Graph;

use crate::validate::{Diagnostic, Lint, target_location};

/// Lint that warns about setting categories dropped during rendering.
pub struct UnsupportedSettingLint;

const NAME: &str = "unsupported-setting";

impl Lint for UnsupportedSettingLint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, graph: &Graph, diagnostics: &mut Vec<Diagnostic>) {
        for package in &graph.packages {
            for target in &package.targets {
                for setting in target.settings.iter().filter(|s| !s.kind.is_supported()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            NAME,
                            format!(
                                "setting '{}' of target '{}' is not supported and will be ignored",
                                setting.kind.as_str(),
                                target.name
                            ),
                        )
                        .at(target_location(&package.identity, &target.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_only_unsupported() {
        let graph: Graph = r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "core"
            kind = "library"
            settings = [
                { kind = "link-libraries", values = ["z"] },
                { kind = "linked-framework", values = ["Foundation"] },
                { kind = "other-compiler-flags", values = ["-O2"] },
            ]
            "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        UnsupportedSettingLint.check(&graph, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'linked-framework'"));
    }
}
