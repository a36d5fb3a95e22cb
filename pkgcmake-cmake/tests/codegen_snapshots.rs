//! Snapshot tests for CMake generation.
//!
//! These tests verify that the generated build script matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pkgcmake_cmake::{GenContext, Generator};
use pkgcmake_codegen::{
    naming::NamingPolicy,
    validate::{Severity, Validator},
};
use pkgcmake_core::WriteResult;
use pkgcmake_graph::Graph;

const APP: &str = r#"
    [[packages]]
    identity = "app"

    [[packages.targets]]
    name = "core"
    kind = "library"
    sources = ["/work/app/Sources/core/a.swift", "/work/app/Sources/core/b.swift"]

    [[packages.targets]]
    name = "exe"
    kind = "executable"
    sources = ["/work/app/Sources/exe/main.swift"]
    dependencies = [{ target = "core" }]

    [[packages.products]]
    name = "app-exe"
    kind = "executable"
    targets = ["exe"]
"#;

const CFOO: &str = r#"
    [[packages]]
    identity = "cfoo"

    [[packages.targets]]
    name = "CFoo"
    kind = "library"
    sources = ["/pkg/Sources/CFoo/foo.cpp"]
    module = { language = "clang", include-dir = "/pkg/include", standard = "c++17" }

    [[packages.targets]]
    name = "Foo"
    kind = "library"
    sources = ["/pkg/Sources/Foo/Foo.swift"]
    dependencies = [{ target = "CFoo" }]

    [[packages.products]]
    name = "Foo"
    kind = "static-library"
    targets = ["Foo"]
"#;

/// Render a graph document with the given root and scope.
fn render(graph_toml: &str, root: &str, scope: Option<&str>) -> String {
    let graph: Graph = graph_toml.parse().expect("Failed to parse graph");
    let ctx = GenContext::new(root, NamingPolicy::new(scope.map(str::to_string)));
    Generator::new(&graph, &ctx)
        .render()
        .expect("Failed to render graph")
}

#[test]
fn test_app_unscoped() {
    let code = render(APP, "/work/app", None);
    insta::assert_snapshot!("app_unscoped", code);
}

#[test]
fn test_app_scoped() {
    let code = render(APP, "/work/app", Some("pkg"));

    assert!(code.contains("add_library(pkg::core ALIAS pkg-app__core)\n"));
    assert!(!code.contains("pkg::app-exe"));
    insta::assert_snapshot!("app_scoped", code);
}

#[test]
fn test_native_target_with_standard() {
    let code = render(CFOO, "/pkg", None);
    insta::assert_snapshot!("native_cxx17", code);
}

#[test]
fn test_scoped_target_and_product_alias_collision_is_rejected() {
    let graph: Graph = CFOO.parse().unwrap();
    let code = render(CFOO, "/pkg", Some("x"));
    assert_eq!(code.matches("add_library(x::Foo ALIAS").count(), 2);

    let report = Validator::for_naming(&NamingPolicy::scoped("x")).run(&graph);
    let errors: Vec<_> = report.with_severity(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].lint, "alias-collision");
    assert_eq!(errors[0].location.as_deref(), Some("packages.cfoo.products.Foo"));

    let unscoped = Validator::for_naming(&NamingPolicy::unscoped()).run(&graph);
    assert!(!unscoped.has_errors());
}

#[test]
fn test_unit_order_follows_graph() {
    let code = render(APP, "/work/app", None);

    let core = code.find("add_library(app__core STATIC").unwrap();
    let exe = code.find("add_executable(app__exe").unwrap();
    let product = code.find("add_executable(app-exe empty.swift").unwrap();
    assert!(core < exe && exe < product);
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(
        render(CFOO, "/pkg", Some("x")),
        render(CFOO, "/pkg", Some("x"))
    );
}

#[test]
fn test_empty_scope_is_unscoped() {
    assert_eq!(
        render(APP, "/work/app", Some("")),
        render(APP, "/work/app", None)
    );
}

#[test]
fn test_generate_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph: Graph = APP.parse().unwrap();
    let ctx = GenContext::new("/work/app", NamingPolicy::unscoped());
    let generator = Generator::new(&graph, &ctx);

    let result = generator.generate(dir.path()).unwrap();

    assert_eq!(result.path, dir.path().join("CMakeLists.txt"));
    assert_eq!(result.write, WriteResult::Written);
    let written = std::fs::read_to_string(&result.path).unwrap();
    assert_eq!(written, generator.render().unwrap());

    let preview = generator.preview().unwrap();
    assert_eq!(preview.path, "CMakeLists.txt");
    assert_eq!(preview.content, written);
}

#[test]
fn test_failed_render_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let graph: Graph = r#"
        [[packages]]
        identity = "app"
        [[packages.targets]]
        name = "core"
        kind = "library"
        dependencies = [{ target = "ghost" }]
    "#
    .parse()
    .unwrap();
    let ctx = GenContext::new("/work/app", NamingPolicy::unscoped());

    let err = Generator::new(&graph, &ctx)
        .generate(dir.path())
        .unwrap_err();

    assert!(err.to_string().contains("unknown target 'ghost'"));
    assert!(!dir.path().join("CMakeLists.txt").exists());
}
