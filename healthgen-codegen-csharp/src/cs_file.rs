//! CSharpFile abstraction for structured C# file generation.
//!
//! Lays out a compilation unit as header comment, `using` directives and a
//! block-scoped namespace holding the declarations.

use healthgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A C# using directive.
#[derive(Debug, Clone)]
pub struct Using(String);

impl Using {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self(namespace.into())
    }
}

impl Renderable for Using {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("using {};", self.0))]
    }
}

/// A structured representation of a C# file.
///
/// # Example
///
/// ```
/// use healthgen_codegen_csharp::{CSharpFile, Using, ast::Class};
///
/// let code = CSharpFile::new()
///     .using(Using::new("System"))
///     .namespace("Demo")
///     .add(Class::new("public", "Empty"))
///     .render();
///
/// assert_eq!(code, "using System;\n\nnamespace Demo\n{\n    public class Empty\n    {\n    }\n}\n");
/// ```
#[derive(Default)]
pub struct CSharpFile {
    header: Vec<String>,
    usings: Vec<Using>,
    namespace: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CSharpFile {
    /// Create a new empty CSharpFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the leading `//` comment.
    pub fn header_line(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add a using directive.
    pub fn using(mut self, using: Using) -> Self {
        self.usings.push(using);
        self
    }

    /// Wrap the body in a block-scoped namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with C# indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::CSHARP)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if !self.header.is_empty() {
            for line in &self.header {
                builder.push_comment("//", line);
            }
            sections += 1;
        }

        if !self.usings.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for using in &self.usings {
                builder.emit(using);
            }
            sections += 1;
        }

        if self.body.is_empty() && self.namespace.is_none() {
            return builder.build();
        }
        if sections > 0 {
            builder.push_blank();
        }

        let body = self.body_fragments();
        let fragment = match &self.namespace {
            Some(namespace) => CodeFragment::braced(format!("namespace {}", namespace), body),
            None => CodeFragment::sequence(body),
        };
        builder.apply_fragment(fragment);

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.usings.is_empty() && self.body.is_empty()
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for (i, node) in self.body.iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::blank());
            }
            fragments.extend(node.iter().cloned());
        }
        fragments
    }
}
