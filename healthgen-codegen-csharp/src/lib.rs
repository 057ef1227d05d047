//! C# (ASP.NET Core) emitter for health definitions.
//!
//! Turns a [`Definition`] into a single compilation unit exposing
//! `AddDefinitionFileHealthChecks(this IServiceCollection source)`, which
//! registers one health check per dependency.
//!
//! ```
//! let code = healthgen_codegen_csharp::generate(
//!     "name: svc\ndependencies:\n  - name: db\n    connectionString: Server=x\n    type: sqlserver\n    tags: [ready]\n",
//! )
//! .unwrap();
//!
//! assert!(code.contains(
//!     r#".AddSqlServer("Server=x", name: "db", tags: new string[] { "ready" });"#
//! ));
//! ```

mod cs_file;
mod generator;
mod registration;

pub mod ast;
pub mod files;
pub mod literal;

pub use cs_file::{CSharpFile, Using};
pub use generator::{DEFAULT_NAMESPACE, Generator};
pub use healthgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use healthgen_definition::{DEFAULT_FILENAME, Definition, parse_definition, parse_optional};
pub use registration::{REGISTRY, registration, registration_chain};

/// Parse `text` and render the C# source for it.
///
/// No I/O happens here. An unsupported dependency type fails the whole call
/// and nothing is rendered.
pub fn generate(text: &str) -> healthgen_definition::Result<String> {
    let definition = parse_definition(text, DEFAULT_FILENAME)?;
    Ok(render(&definition))
}

/// Like [`generate`], but a blank document means nothing is configured.
pub fn generate_optional(text: &str) -> healthgen_definition::Result<Option<String>> {
    Ok(parse_optional(text, DEFAULT_FILENAME)?.map(|definition| render(&definition)))
}

/// Render an already loaded definition into the default namespace.
pub fn render(definition: &Definition) -> String {
    Generator::new(definition).render()
}
