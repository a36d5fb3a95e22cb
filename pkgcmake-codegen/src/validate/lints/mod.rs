//! Built-in lints for graph validation.

mod alias_collision;
mod dependency_cycle;
mod duplicate_name;
mod ignored_product;
mod missing_include_dir;
mod unresolved_reference;
mod unsupported_setting;

pub use alias_collision::AliasCollisionLint;
pub use dependency_cycle::DependencyCycleLint;
pub use duplicate_name::DuplicateNameLint;
pub use ignored_product::IgnoredProductLint;
pub use missing_include_dir::MissingIncludeDirLint;
pub use unresolved_reference::UnresolvedReferenceLint;
pub use unsupported_setting::UnsupportedSettingLint;
