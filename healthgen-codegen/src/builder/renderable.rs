//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! This module provides abstractions that allow AST nodes to be composed
//! and rendered without direct coupling to CodeBuilder.

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between AST nodes
/// and the final string output, enabling composition and transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A line comment with the given prefix (`//`, `///`, `#`).
    Comment { prefix: &'static str, text: String },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a brace-delimited block: the header line, `{`, body, `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::block("{", body, Some("}".to_string())),
        ])
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Create a comment fragment.
    pub fn comment(prefix: &'static str, text: impl Into<String>) -> Self {
        Self::Comment {
            prefix,
            text: text.into(),
        }
    }
}

/// Trait for types that can be rendered to code fragments.
///
/// Implement this trait for AST nodes to enable them to be rendered
/// through CodeBuilder without direct coupling.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(
            CodeFragment::comment("//", "note"),
            CodeFragment::Comment {
                prefix: "//",
                text: "note".to_string()
            }
        );
    }

    #[test]
    fn test_braced_fragment() {
        let braced = CodeFragment::braced("namespace Foo", vec![CodeFragment::line("x;")]);
        let CodeFragment::Sequence(parts) = braced else {
            panic!("Expected Sequence variant");
        };
        assert_eq!(parts[0], CodeFragment::line("namespace Foo"));
        match &parts[1] {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "{");
                assert_eq!(body.len(), 1);
                assert_eq!(close.as_deref(), Some("}"));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
