//! Builder for C# fluent method chains.

/// A method call in a chain.
#[derive(Debug, Clone)]
struct MethodCall {
    name: String,
    args: Vec<String>,
}

/// Builder for fluent calls like `source.AddHealthChecks().AddUrlGroup(...);`.
///
/// Arguments are emitted verbatim, so callers pass already formatted
/// expressions (see [`crate::literal`]).
#[derive(Debug, Clone)]
pub struct MethodChain {
    base: String,
    calls: Vec<MethodCall>,
    terminated: bool,
    indent: usize,
}

impl MethodChain {
    /// Create a new method chain starting from a base expression.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            calls: Vec::new(),
            terminated: false,
            indent: 4,
        }
    }

    /// Set the indentation for continuation lines (default: 4 spaces).
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Add a method call with no arguments.
    pub fn method(self, name: impl Into<String>) -> Self {
        self.method_args(name, Vec::<String>::new())
    }

    /// Add a method call with the given arguments.
    pub fn method_args(
        mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.calls.push(MethodCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// End the chain with `;`, making it a statement.
    pub fn statement(mut self) -> Self {
        self.terminated = true;
        self
    }

    /// Number of chained calls after the base expression.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Build the chain on a single line.
    pub fn build_inline(&self) -> String {
        self.render("")
    }

    /// Build the chain with each call on its own continuation line.
    pub fn build(&self) -> String {
        self.render(&format!("\n{}", " ".repeat(self.indent)))
    }

    fn render(&self, separator: &str) -> String {
        let mut result = self.base.clone();

        for call in &self.calls {
            result.push_str(separator);
            result.push_str(&format!(".{}({})", call.name, call.args.join(", ")));
        }

        if self.terminated {
            result.push(';');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_chain() {
        let chain = MethodChain::new("services")
            .method("AddHealthChecks")
            .method_args("AddCheck", ["\"self\"", "check"])
            .build_inline();
        assert_eq!(chain, "services.AddHealthChecks().AddCheck(\"self\", check)");
    }

    #[test]
    fn test_multiline_statement() {
        let chain = MethodChain::new("builder")
            .method_args("AddSqlServer", ["cs"])
            .method_args("AddUrlGroup", ["uri"])
            .statement()
            .build();
        assert_eq!(
            chain,
            "builder\n    .AddSqlServer(cs)\n    .AddUrlGroup(uri);"
        );
    }

    #[test]
    fn test_custom_indent() {
        let chain = MethodChain::new("x").indent(2).method("Y").build();
        assert_eq!(chain, "x\n  .Y()");
    }

    #[test]
    fn test_empty_chain() {
        let chain = MethodChain::new("source.AddHealthChecks()").statement();
        assert!(chain.is_empty());
        assert_eq!(chain.build(), "source.AddHealthChecks();");
    }
}
