//! Built-in lints for health definitions.

mod duplicate_dependency;
mod empty_connection_string;
mod untagged_dependency;
mod uri_scheme;

pub use duplicate_dependency::DuplicateDependencyLint;
pub use empty_connection_string::EmptyConnectionStringLint;
pub use untagged_dependency::UntaggedDependencyLint;
pub use uri_scheme::UriSchemeLint;
