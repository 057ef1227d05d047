//! Health check registration calls.

use healthgen_definition::{Definition, Dependency, DependencyKind};

use crate::{ast::MethodChain, literal};

/// Expression every registration chain starts from.
pub const REGISTRY: &str = "source.AddHealthChecks()";

/// The builder method and arguments that register one dependency.
pub fn registration(dependency: &Dependency) -> (&'static str, [String; 3]) {
    let target = literal::string(dependency.connection_string());
    let name = format!("name: {}", literal::string(dependency.name()));
    let tags = format!(
        "tags: {}",
        literal::string_array(dependency.tags().iter().map(String::as_str))
    );

    match dependency.kind() {
        DependencyKind::Uri => ("AddUrlGroup", [format!("new Uri({})", target), name, tags]),
        DependencyKind::SqlServer => ("AddSqlServer", [target, name, tags]),
    }
}

/// The registration chain as a method chain, one call per dependency.
pub fn registration_method_chain(definition: &Definition) -> MethodChain {
    definition
        .dependencies()
        .iter()
        .fold(MethodChain::new(REGISTRY), |chain, dependency| {
            let (method, args) = registration(dependency);
            chain.method_args(method, args)
        })
        .statement()
}

/// The full registration statement, calls in declaration order.
///
/// With no dependencies this is exactly `source.AddHealthChecks();`.
pub fn registration_chain(definition: &Definition) -> String {
    registration_method_chain(definition).build()
}
