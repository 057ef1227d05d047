//! Parsing and validation of `health.yml` definitions.
//!
//! A definition names a service and lists the external dependencies whose
//! health should be probed:
//!
//! ```yaml
//! name: orders
//! dependencies:
//!   - name: catalog
//!     connectionString: https://catalog.internal/health
//!     type: uri
//!     tags: [ready]
//!   - name: db
//!     connectionString: Server=sql;Database=orders
//!     type: sqlserver
//!     tags: [ready, live]
//! ```
//!
//! Dependency types are resolved while parsing, so a [`Definition`] only ever
//! holds supported kinds.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod error;
mod file;
mod parse;
mod validate;

pub use definition::{Definition, Dependency, DependencyKind, UnknownDependencyKind};
pub use error::{Error, Result, SourceContext};
pub use file::{DEFINITION_FILE_SUFFIX, DefinitionFile, locate_definition};
pub use parse::{DEFAULT_FILENAME, is_blank_document, parse_definition, parse_optional};
