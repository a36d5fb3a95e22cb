//! Rendering of graph products.

use eyre::{Result, eyre};
use pkgcmake_codegen::{builder::CodeBuilder, naming::module_name};
use pkgcmake_graph::{Package, Product, ProductKind, TargetKind};

use crate::{
    GenContext, SWIFT_PLACEHOLDER,
    target::{push_alias, push_module_name},
    target_objects,
};

/// Renders one build unit per product.
pub struct ProductRenderer<'a> {
    ctx: &'a GenContext,
}

impl<'a> ProductRenderer<'a> {
    pub fn new(ctx: &'a GenContext) -> Self {
        Self { ctx }
    }

    /// Append the directives of `product`, owned by `package`.
    ///
    /// Products that are neither libraries nor executables produce nothing.
    pub fn render(&self, out: &mut CodeBuilder, package: &Package, product: &Product) -> Result<()> {
        let naming = self.ctx.naming();
        let name = naming.product_name(&product.name);
        tracing::debug!(
            package = %package.identity,
            product = %product.name,
            kind = product.kind.as_str(),
            "rendering product"
        );

        match product.kind {
            ProductKind::DynamicLibrary => {
                let members = self.members(package, product, true)?;
                out.push_block_with_close(
                    &format!("add_library({} SHARED {}", name, SWIFT_PLACEHOLDER),
                    ")",
                    |b| {
                        for member in &members {
                            b.push_line(member);
                        }
                    },
                );
                out.push_line(&format!(
                    "target_include_directories({} PUBLIC ${{CMAKE_CURRENT_BINARY_DIR}})",
                    name
                ));
                push_module_name(out, &name, &module_name(&format!("{}_product", name)));
                push_alias(out, naming, &product.name, &name);
            }
            ProductKind::StaticLibrary | ProductKind::AutomaticLibrary => {
                let members = self.members(package, product, false)?;
                out.push_line(&format!("add_library({} INTERFACE)", name));
                out.push_block_with_close(
                    &format!("target_link_libraries({} INTERFACE", name),
                    ")",
                    |b| {
                        for member in &members {
                            b.push_line(member);
                        }
                    },
                );
                out.push_line(&format!(
                    "target_include_directories({} INTERFACE ${{CMAKE_CURRENT_BINARY_DIR}})",
                    name
                ));
                push_alias(out, naming, &product.name, &name);
            }
            ProductKind::Executable => {
                let members = self.members(package, product, true)?;
                out.push_block_with_close(
                    &format!("add_executable({} {}", name, SWIFT_PLACEHOLDER),
                    ")",
                    |b| {
                        for member in &members {
                            b.push_line(member);
                        }
                    },
                );
                out.push_line(&format!(
                    "target_include_directories({} PUBLIC ${{CMAKE_CURRENT_BINARY_DIR}})",
                    name
                ));
            }
            ProductKind::Plugin | ProductKind::Test | ProductKind::Snippet | ProductKind::Macro => {
                tracing::debug!(product = %product.name, "product kind is not rendered");
            }
        }

        Ok(())
    }

    /// Member references: object files in `objects` mode or for executable
    /// members, plain scoped names otherwise.
    fn members(&self, package: &Package, product: &Product, objects: bool) -> Result<Vec<String>> {
        product
            .targets
            .iter()
            .map(|member| {
                let target = package.target(member).ok_or_else(|| {
                    eyre!(
                        "product '{}' of package '{}' names unknown target '{}'",
                        product.name,
                        package.identity,
                        member
                    )
                })?;
                let name = self.ctx.naming().target_name(&package.identity, &target.name);
                Ok(if objects || target.kind == TargetKind::Executable {
                    target_objects(&name)
                } else {
                    name
                })
            })
            .collect()
    }
}
