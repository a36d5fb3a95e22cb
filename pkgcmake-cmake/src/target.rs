//! Rendering of graph targets.

use eyre::{Result, eyre};
use pkgcmake_codegen::{
    builder::CodeBuilder,
    naming::{NamingPolicy, include_dir_arg, module_name, xcc_include_option},
};
use pkgcmake_graph::{Dependency, Graph, Package, Resolved, SettingKind, Target, TargetKind};

use crate::{CLANG_PLACEHOLDER, GenContext, SWIFT_PLACEHOLDER, includes, target_objects};

const FRAMEWORK_SEARCH_PATH: &str =
    r#""SHELL:-F ${CMAKE_OSX_SYSROOT}/../../Library/Frameworks""#;
const LIBRARY_SEARCH_PATH: &str = "${CMAKE_OSX_SYSROOT}/../../usr/lib";

/// Rendered setting categories, in output order.
const SETTING_DIRECTIVES: [(SettingKind, &str, &str); 3] = [
    (
        SettingKind::ActiveCompilationConditions,
        "target_compile_definitions",
        "PRIVATE",
    ),
    (SettingKind::LinkLibraries, "target_link_libraries", "PUBLIC"),
    (SettingKind::OtherCompilerFlags, "target_compile_options", "PRIVATE"),
];

/// Renders one build unit per target.
pub struct TargetRenderer<'a> {
    ctx: &'a GenContext,
    graph: &'a Graph,
}

impl<'a> TargetRenderer<'a> {
    pub fn new(ctx: &'a GenContext, graph: &'a Graph) -> Self {
        Self { ctx, graph }
    }

    /// Append the directives of `target`, owned by `package`.
    pub fn render(&self, out: &mut CodeBuilder, package: &Package, target: &Target) -> Result<()> {
        let naming = self.ctx.naming();
        let name = naming.target_name(&package.identity, &target.name);
        tracing::debug!(
            package = %package.identity,
            target = %target.name,
            kind = target.kind.as_str(),
            "rendering target"
        );

        if target.kind == TargetKind::SystemLibrary {
            out.push_line(&format!("add_library({} INTERFACE)", name));
            if let Some(dir) = target.include_dir() {
                out.push_block_with_close(
                    &format!("target_include_directories({} INTERFACE", name),
                    ")",
                    |b| {
                        b.push_line(&include_dir_arg(&dir.to_string_lossy()));
                    },
                );
            }
            push_alias(out, naming, &target.name, &name);
            return Ok(());
        }

        let sources = target
            .sources
            .iter()
            .map(|source| self.ctx.relative_source(source))
            .collect::<Result<Vec<_>>>()?;
        let links = target
            .dependencies
            .iter()
            .map(|dependency| self.link_entry(package, target, dependency))
            .collect::<Result<Vec<_>>>()?;

        let declaration = match target.kind {
            TargetKind::Executable => format!("add_executable({}", name),
            _ => format!("add_library({} STATIC", name),
        };
        out.push_block_with_close(&declaration, ")", |b| {
            if sources.is_empty() {
                b.push_line(if target.is_clang() {
                    CLANG_PLACEHOLDER
                } else {
                    SWIFT_PLACEHOLDER
                });
            }
            for source in &sources {
                b.push_line(&format!("${{CMAKE_CURRENT_LIST_DIR}}/{}", source));
            }
        });

        out.push_line(&format!(
            "target_include_directories({} PUBLIC ${{CMAKE_CURRENT_BINARY_DIR}})",
            name
        ));
        push_module_name(out, &name, &module_name(&target.name));

        let definition = if target.is_clang() {
            "SWIFT_PACKAGE=1"
        } else {
            "SWIFT_PACKAGE"
        };
        out.push_line(&format!(
            "target_compile_definitions({} PRIVATE {})",
            name, definition
        ));

        if let Some(dir) = target.include_dir() {
            out.push_block_with_close(
                &format!("target_include_directories({} PUBLIC", name),
                ")",
                |b| {
                    b.push_line(&include_dir_arg(&dir.to_string_lossy()));
                },
            );
            if let Some(standard) = target.standard() {
                out.push_block_with_close(
                    &format!("set_target_properties({} PROPERTIES", name),
                    ")",
                    |b| {
                        b.push_line(&format!(
                            "{} {}",
                            standard.cmake_property(),
                            standard.level()
                        ));
                        if standard.is_gnu() {
                            b.push_line(&format!("{} ON", standard.extensions_property()));
                        }
                    },
                );
            }
        } else {
            let dirs = includes::native_include_dirs(self.graph, package, target);
            if !dirs.is_empty() {
                out.push_block_with_close(
                    &format!("target_compile_options({} PRIVATE", name),
                    ")",
                    |b| {
                        for dir in &dirs {
                            b.push_line(&xcc_include_option(&dir.to_string_lossy()));
                        }
                    },
                );
            }
        }

        out.push_line(&format!(
            "target_compile_options({} PRIVATE {})",
            name, FRAMEWORK_SEARCH_PATH
        ));
        out.push_line(&format!(
            "target_link_directories({} PRIVATE {})",
            name, LIBRARY_SEARCH_PATH
        ));

        self.push_settings(out, &name, target);

        if !links.is_empty() {
            out.push_block_with_close(
                &format!("target_link_libraries({} PRIVATE", name),
                ")",
                |b| {
                    for link in &links {
                        b.push_line(link);
                    }
                },
            );
        }

        if target.kind != TargetKind::Executable {
            push_alias(out, naming, &target.name, &name);
        }

        Ok(())
    }

    fn push_settings(&self, out: &mut CodeBuilder, name: &str, target: &Target) {
        for setting in &target.settings {
            if !setting.kind.is_supported() {
                tracing::debug!(
                    target = %target.name,
                    setting = setting.kind.as_str(),
                    "ignoring unsupported setting"
                );
            } else if setting.condition.is_some() {
                tracing::debug!(
                    target = %target.name,
                    setting = setting.kind.as_str(),
                    "setting condition is not evaluated"
                );
            }
        }

        for (kind, directive, visibility) in &SETTING_DIRECTIVES {
            let values: Vec<&str> = target
                .settings
                .iter()
                .filter(|setting| setting.kind == *kind)
                .flat_map(|setting| setting.values.iter().map(String::as_str))
                .collect();
            if values.is_empty() {
                continue;
            }

            out.push_block_with_close(
                &format!("{}({} {}", directive, name, visibility),
                ")",
                |b| {
                    for value in values {
                        b.push_line(value);
                    }
                },
            );
        }
    }

    /// Name a dependency is linked by.
    fn link_entry(
        &self,
        package: &Package,
        target: &Target,
        dependency: &Dependency,
    ) -> Result<String> {
        if dependency.condition().is_some() {
            tracing::debug!(
                target = %target.name,
                dependency = dependency.name(),
                "dependency condition is not evaluated"
            );
        }

        let naming = self.ctx.naming();
        match package.resolve(self.graph, dependency) {
            Resolved::Target(owner, dep) => {
                let name = naming.target_name(&owner.identity, &dep.name);
                Ok(if dep.kind == TargetKind::Executable {
                    target_objects(&name)
                } else {
                    name
                })
            }
            Resolved::Product(_, product) => Ok(naming.product_name(&product.name)),
            Resolved::Missing => Err(match dependency {
                Dependency::Target { name, .. } => eyre!(
                    "target '{}' of package '{}' depends on unknown target '{}'",
                    target.name,
                    package.identity,
                    name
                ),
                Dependency::Product {
                    name,
                    package: owner,
                    ..
                } => eyre!(
                    "target '{}' of package '{}' depends on unknown product '{}' of package '{}'",
                    target.name,
                    package.identity,
                    name,
                    owner
                ),
            }),
        }
    }
}

/// `set_target_properties` block naming the Swift module.
pub(crate) fn push_module_name(out: &mut CodeBuilder, name: &str, module: &str) {
    out.push_block_with_close(
        &format!("set_target_properties({} PROPERTIES", name),
        ")",
        |b| {
            b.push_line(&format!("Swift_MODULE_NAME {}", module));
        },
    );
}

/// `scope::base` alias of a library unit. Nothing when unscoped.
pub(crate) fn push_alias(out: &mut CodeBuilder, naming: &NamingPolicy, base: &str, name: &str) {
    if let Some(alias) = naming.alias_name(base) {
        out.push_line(&format!("add_library({} ALIAS {})", alias, name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str, scope: Option<&str>, package: &str, target: &str) -> Result<String> {
        let graph: Graph = content.parse().expect("Failed to parse test graph");
        let ctx = GenContext::new(
            "/work/app",
            NamingPolicy::new(scope.map(str::to_string)),
        );
        let package = graph.package(package).unwrap();
        let target = package.target(target).unwrap();
        let mut out = CodeBuilder::cmake();
        TargetRenderer::new(&ctx, &graph).render(&mut out, package, target)?;
        Ok(out.build())
    }

    #[test]
    fn test_system_library() {
        let code = render(
            r#"
            [[packages]]
            identity = "sys"
            [[packages.targets]]
            name = "CZlib"
            kind = "system-library"
            module = { language = "clang", include-dir = "/usr/include" }
            "#,
            Some("pkg"),
            "sys",
            "CZlib",
        )
        .unwrap();

        assert_eq!(
            code,
            "add_library(pkg-sys__CZlib INTERFACE)\n\
             target_include_directories(pkg-sys__CZlib INTERFACE\n  /usr/include\n)\n\
             add_library(pkg::CZlib ALIAS pkg-sys__CZlib)\n"
        );
        assert!(!code.contains("CMAKE_CURRENT_LIST_DIR"));
    }

    #[test]
    fn test_empty_sources_get_one_placeholder() {
        let content = r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "swifty"
            kind = "library"
            [[packages.targets]]
            name = "cish"
            kind = "library"
            module = { language = "clang", include-dir = "/work/app/include" }
            "#;

        let swift = render(content, None, "app", "swifty").unwrap();
        assert!(swift.starts_with("add_library(app__swifty STATIC\n  empty.swift\n)\n"));
        assert_eq!(swift.matches("empty").count(), 1);

        let clang = render(content, None, "app", "cish").unwrap();
        assert!(clang.starts_with("add_library(app__cish STATIC\n  empty.c\n)\n"));
        assert!(clang.contains("target_compile_definitions(app__cish PRIVATE SWIFT_PACKAGE=1)\n"));
    }

    #[test]
    fn test_gnu_standard_enables_extensions() {
        let code = render(
            r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "cfoo"
            kind = "library"
            sources = ["/work/app/Sources/cfoo/foo.c"]
            module = { language = "clang", include-dir = "/work/app/Sources/cfoo/include", standard = "gnu11" }
            "#,
            None,
            "app",
            "cfoo",
        )
        .unwrap();

        assert!(code.contains(
            "set_target_properties(app__cfoo PROPERTIES\n  C_STANDARD 11\n  C_EXTENSIONS ON\n)\n"
        ));
        assert!(!code.contains("-Xcc"));
    }

    #[test]
    fn test_settings_in_category_order() {
        let code = render(
            r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "core"
            kind = "library"
            sources = ["/work/app/a.swift"]
            settings = [
                { kind = "other-compiler-flags", values = ["-Onone"] },
                { kind = "link-libraries", values = ["z"] },
                { kind = "active-compilation-conditions", values = ["DEBUG"] },
                { kind = "linked-framework", values = ["Foundation"] },
                { kind = "active-compilation-conditions", values = ["TRACE"] },
            ]
            "#,
            None,
            "app",
            "core",
        )
        .unwrap();

        let defs = code
            .find("target_compile_definitions(app__core PRIVATE\n  DEBUG\n  TRACE\n)\n")
            .unwrap();
        let libs = code
            .find("target_link_libraries(app__core PUBLIC\n  z\n)\n")
            .unwrap();
        let flags = code
            .find("target_compile_options(app__core PRIVATE\n  -Onone\n)\n")
            .unwrap();
        assert!(defs < libs && libs < flags);
        assert!(!code.contains("Foundation"));
    }

    #[test]
    fn test_executable_dependency_is_object_reference() {
        let code = render(
            r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "tool"
            kind = "executable"
            sources = ["/work/app/tool/main.swift"]
            [[packages.targets]]
            name = "tests"
            kind = "library"
            sources = ["/work/app/tests/t.swift"]
            dependencies = [{ target = "tool" }, { product = "Logging", package = "swift-log" }]

            [[packages]]
            identity = "swift-log"
            [[packages.products]]
            name = "Logging"
            kind = "automatic-library"
            "#,
            Some("pkg"),
            "app",
            "tests",
        )
        .unwrap();

        assert!(code.contains(
            "target_link_libraries(pkg-app__tests PRIVATE\n  $<TARGET_OBJECTS:pkg-app__tool>\n  pkg-Logging\n)\n"
        ));
        assert!(code.ends_with("add_library(pkg::tests ALIAS pkg-app__tests)\n"));
    }

    #[test]
    fn test_unresolved_dependency_fails() {
        let err = render(
            r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "core"
            kind = "library"
            dependencies = [{ product = "Missing", package = "nowhere" }]
            "#,
            None,
            "app",
            "core",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "target 'core' of package 'app' depends on unknown product 'Missing' of package 'nowhere'"
        );
    }

    #[test]
    fn test_include_dirs_with_spaces_stay_single_arguments() {
        let content = r#"
            [[packages]]
            identity = "app"
            [[packages.targets]]
            name = "CLib"
            kind = "library"
            sources = ["/work/app/Sources/CLib/lib.c"]
            module = { language = "clang", include-dir = "/work/My Libs/<gen>" }
            [[packages.targets]]
            name = "Lib"
            kind = "library"
            sources = ["/work/app/Sources/Lib/lib.swift"]
            dependencies = [{ target = "CLib" }]
            "#;

        let clang = render(content, None, "app", "CLib").unwrap();
        assert!(clang.contains(
            "target_include_directories(app__CLib PUBLIC\n  \"/work/My Libs/<gen>\"\n)\n"
        ));

        let swift = render(content, None, "app", "Lib").unwrap();
        assert!(swift.contains(
            "target_compile_options(app__Lib PRIVATE\n  \"SHELL:-Xcc \\\"-I/work/My Libs/<gen>\\\"\"\n)\n"
        ));
    }

    #[test]
    fn test_module_name_is_normalized() {
        let mut out = CodeBuilder::cmake();
        push_module_name(&mut out, "app__my-lib", &module_name("my-lib"));
        assert_eq!(
            out.build(),
            "set_target_properties(app__my-lib PROPERTIES\n  Swift_MODULE_NAME my_lib\n)\n"
        );
    }
}
