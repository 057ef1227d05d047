//! Class and method declarations.

use healthgen_codegen::{CodeFragment, Renderable};

/// A C# method declaration with a pre-built body.
#[derive(Debug, Clone)]
pub struct Method {
    signature: String,
    body: Vec<CodeFragment>,
}

impl Method {
    /// Create a method from its full signature, e.g.
    /// `public static int Answer()`.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    /// Append a statement. Multi-line statements keep their relative indentation.
    pub fn statement(mut self, code: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(code));
        self
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(&self.signature, self.body.clone())]
    }
}

/// A C# class declaration.
#[derive(Debug, Clone)]
pub struct Class {
    modifiers: String,
    name: String,
    members: Vec<Vec<CodeFragment>>,
}

impl Class {
    /// Create a class, e.g. `Class::new("public static", "Extensions")`.
    pub fn new(modifiers: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifiers: modifiers.into(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member. Members are separated by a blank line.
    pub fn member(mut self, member: impl Renderable) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    fn header(&self) -> String {
        if self.modifiers.is_empty() {
            format!("class {}", self.name)
        } else {
            format!("{} class {}", self.modifiers, self.name)
        }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(member.iter().cloned());
        }
        vec![CodeFragment::braced(self.header(), body)]
    }
}

#[cfg(test)]
mod tests {
    use healthgen_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_class_with_methods() {
        let class = Class::new("public static", "Answers")
            .member(Method::new("public static int One()").statement("return 1;"))
            .member(Method::new("public static int Two()").statement("return 2;"));

        let mut builder = CodeBuilder::csharp();
        builder.emit(&class);

        insta::assert_snapshot!(builder.build(), @r"
        public static class Answers
        {
            public static int One()
            {
                return 1;
            }

            public static int Two()
            {
                return 2;
            }
        }
        ");
    }

    #[test]
    fn test_multiline_statement_indent() {
        let method = Method::new("void Run()").statement("a\n    .B();");

        let mut builder = CodeBuilder::csharp();
        builder.emit(&method);

        assert_eq!(builder.build(), "void Run()\n{\n    a\n        .B();\n}\n");
    }
}
