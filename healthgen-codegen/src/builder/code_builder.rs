//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) prefixed with `push_`.
///
/// # Example (Consuming API)
///
/// ```
/// use healthgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .line("static void Main()")
///     .block_with_close("{", "}", |b| b.line("Run();"))
///     .build();
///
/// assert_eq!(code, "static void Main()\n{\n    Run();\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use healthgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::yaml();
/// builder
///     .push_line("dependencies:")
///     .push_indent()
///     .push_line("- name: db")
///     .push_dedent();
/// assert_eq!(builder.build(), "dependencies:\n  - name: db\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (C# default).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Create a new CodeBuilder with 2-space indentation (YAML default).
    pub fn yaml() -> Self {
        Self::new(Indent::YAML)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line string at the current indentation.
    ///
    /// Relative indentation inside `s` is kept.
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        for line in s.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a comment line such as `// text` or `# text` (mutable).
    ///
    /// An empty text produces the bare prefix with no trailing space.
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) if s.contains('\n') => {
                self.push_lines(&s);
            }
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Comment { prefix, text } => {
                self.push_comment(prefix, &text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a comment line.
    pub fn comment(mut self, prefix: &str, text: &str) -> Self {
        self.push_comment(prefix, text);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::csharp().line("var x = 1;").build();
        assert_eq!(code, "var x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::csharp()
            .line("{")
            .indent()
            .line("return;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "{\n    return;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::csharp().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_push_lines_keeps_relative_indent() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_indent()
            .push_lines("source.AddHealthChecks()\n    .AddUrlGroup(u);");
        assert_eq!(
            builder.build(),
            "    source.AddHealthChecks()\n        .AddUrlGroup(u);\n"
        );
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::yaml()
            .comment("#", "health checks")
            .comment("#", "")
            .line("name: svc")
            .build();
        assert_eq!(code, "# health checks\n#\nname: svc\n");
    }

    #[test]
    fn test_conditional_and_each() {
        let code = CodeBuilder::yaml()
            .when(false, |b| b.line("skipped"))
            .line("tags:")
            .indent()
            .each(["ready", "live"], |b, tag| b.line(&format!("- {}", tag)))
            .dedent()
            .build();

        assert_eq!(code, "tags:\n  - ready\n  - live\n");
    }

    #[test]
    fn test_emit_fragments() {
        struct Class;

        impl Renderable for Class {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("///", "<summary>Demo</summary>"),
                    CodeFragment::braced(
                        "static class Demo",
                        vec![CodeFragment::line("const int X = 1;")],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::csharp();
        builder.emit(&Class);
        assert_eq!(
            builder.build(),
            "/// <summary>Demo</summary>\nstatic class Demo\n{\n    const int X = 1;\n}\n"
        );
    }
}
