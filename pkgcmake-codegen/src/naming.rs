//! Naming policy for generated build units.
//!
//! Every global identifier in a generated script goes through a
//! [`NamingPolicy`]: targets are named `<package>__<target>`, products keep
//! their own name, and a configured scope prefixes both as `<scope>-<name>`.

/// Separator between package identity and target name.
const TARGET_SEPARATOR: &str = "__";

/// Computes scoped identifiers for targets and products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingPolicy {
    scope: Option<String>,
}

impl NamingPolicy {
    /// Create a policy with an optional scope. An empty scope counts as none.
    pub fn new(scope: Option<String>) -> Self {
        Self {
            scope: scope.filter(|s| !s.is_empty()),
        }
    }

    /// Policy that leaves names untouched.
    pub fn unscoped() -> Self {
        Self { scope: None }
    }

    /// Policy prefixing every name with `scope`.
    pub fn scoped(scope: impl Into<String>) -> Self {
        Self::new(Some(scope.into()))
    }

    /// The configured scope.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// `scope-base` when scoped, `base` otherwise.
    pub fn scoped_name(&self, base: &str) -> String {
        match &self.scope {
            Some(scope) => format!("{}-{}", scope, base),
            None => base.to_string(),
        }
    }

    /// `scope::base` when scoped. Unscoped runs emit no aliases.
    pub fn alias_name(&self, base: &str) -> Option<String> {
        self.scope
            .as_ref()
            .map(|scope| format!("{}::{}", scope, base))
    }

    /// Unscoped generated name of a target.
    pub fn target_gen_name(package: &str, target: &str) -> String {
        format!("{}{}{}", package, TARGET_SEPARATOR, target)
    }

    /// Unscoped generated name of a product.
    pub fn product_gen_name(product: &str) -> String {
        product.to_string()
    }

    /// Scoped generated name of a target.
    pub fn target_name(&self, package: &str, target: &str) -> String {
        self.scoped_name(&Self::target_gen_name(package, target))
    }

    /// Scoped generated name of a product.
    pub fn product_name(&self, product: &str) -> String {
        self.scoped_name(&Self::product_gen_name(product))
    }
}

/// Normalize a module name: build-system module identifiers disallow `-`.
pub fn module_name(candidate: &str) -> String {
    candidate.replace('-', "_")
}

/// Escape a source path for use as an unquoted build-script argument.
pub fn escape_path(path: &str) -> String {
    path.replace(' ', "\\ ").replace('>', "_")
}

/// Include directory as a single build-script argument.
///
/// Paths that a CMake or shell tokenizer would split are wrapped in double
/// quotes. The path itself is never rewritten.
pub fn include_dir_arg(dir: &str) -> String {
    quote_if_needed(dir)
}

/// `"SHELL:-Xcc -I<dir>"` option passing `dir` to the C importer.
///
/// The `-I<dir>` word follows the same quoting rule as
/// [`include_dir_arg`], then the whole option is quoted for CMake.
pub fn xcc_include_option(dir: &str) -> String {
    quote(&format!("SHELL:-Xcc {}", quote_if_needed(&format!("-I{}", dir))))
}

fn quote_if_needed(arg: &str) -> String {
    let special = |c: char| c.is_whitespace() || matches!(c, '"' | '\\' | ';' | '(' | ')' | '#');
    if arg.is_empty() || arg.contains(special) {
        quote(arg)
    } else {
        arg.to_string()
    }
}

fn quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_names() {
        let naming = NamingPolicy::unscoped();
        assert_eq!(naming.scoped_name("app__core"), "app__core");
        assert_eq!(naming.alias_name("core"), None);
        assert_eq!(naming.target_name("app", "core"), "app__core");
        assert_eq!(naming.product_name("app-exe"), "app-exe");
    }

    #[test]
    fn test_scoped_names() {
        let naming = NamingPolicy::scoped("pkg");
        assert_eq!(naming.scope(), Some("pkg"));
        assert_eq!(naming.target_name("app", "core"), "pkg-app__core");
        assert_eq!(naming.product_name("app-exe"), "pkg-app-exe");
        assert_eq!(naming.alias_name("core").as_deref(), Some("pkg::core"));
    }

    #[test]
    fn test_empty_scope_is_none() {
        assert_eq!(NamingPolicy::new(Some(String::new())), NamingPolicy::unscoped());
    }

    #[test]
    fn test_gen_names() {
        assert_eq!(NamingPolicy::target_gen_name("swift-log", "Logging"), "swift-log__Logging");
        assert_eq!(NamingPolicy::product_gen_name("Logging"), "Logging");
    }

    #[test]
    fn test_module_name() {
        assert_eq!(module_name("swift-argument-parser"), "swift_argument_parser");
        assert_eq!(module_name("core"), "core");
    }

    #[test]
    fn test_escape_path() {
        assert_eq!(escape_path("My Sources/a b.swift"), "My\\ Sources/a\\ b.swift");
        assert_eq!(escape_path("gen/<out>.c"), "gen/<out_.c");
    }

    #[test]
    fn test_include_dir_arg() {
        assert_eq!(include_dir_arg("/usr/include"), "/usr/include");
        assert_eq!(include_dir_arg("/My Libs/include"), "\"/My Libs/include\"");
        assert_eq!(include_dir_arg("/gen/<out>"), "/gen/<out>");
    }

    #[test]
    fn test_xcc_include_option() {
        assert_eq!(
            xcc_include_option("/pkg/include"),
            "\"SHELL:-Xcc -I/pkg/include\""
        );
        assert_eq!(
            xcc_include_option("/My Libs/include"),
            "\"SHELL:-Xcc \\\"-I/My Libs/include\\\"\""
        );
        assert_eq!(xcc_include_option("/gen/<out>"), "\"SHELL:-Xcc -I/gen/<out>\"");
    }
}
