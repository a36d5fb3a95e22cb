//! Indented line accumulator for generated build scripts.

/// One indentation level.
const INDENT: &str = "  ";

/// Append-only text accumulator with scoped indentation.
///
/// Lines are never reordered: the output is exactly the sequence of
/// `push_*` calls made on the builder.
///
/// ```
/// use pkgcmake_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::cmake();
/// builder.push_block_with_close("target_link_libraries(foo PRIVATE", ")", |b| {
///     b.push_line("bar");
/// });
/// assert_eq!(builder.build(), "target_link_libraries(foo PRIVATE\n  bar\n)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Empty builder at depth zero.
    pub fn cmake() -> Self {
        Self::default()
    }

    /// Append `line` at the current depth.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    /// Run `f` one level deeper, then restore the depth.
    pub fn push_block<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let depth = self.depth;
        self.depth += 1;
        f(self);
        self.depth = depth;
        self
    }

    /// Emit `header`, a nested block produced by `f`, and `close`.
    pub fn push_block_with_close<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_block(f);
        self.push_line(close)
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}
