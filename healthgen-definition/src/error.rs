use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for definition operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "health.yml");
/// ctx.validation_error("dependency 'db' has no 'type'");
/// ctx.unsupported_type_error("redis", "cache", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a YAML deserialization error.
    pub fn parse_error(&self, source: serde_saphyr::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: None,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an unsupported dependency type error.
    pub fn unsupported_type_error(
        &self,
        ty: impl Into<String>,
        dependency: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedType {
            src: self.named_source(),
            span,
            ty: ty.into(),
            dependency: dependency.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'healthgen init' to create a starter health.yml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse health definition")]
    #[diagnostic(
        code(healthgen::parse_error),
        help("expected 'name' and a 'dependencies' list of {{ name, connectionString, type, tags }}")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_saphyr::Error,
    },

    #[error("unsupported dependency type '{ty}' for dependency '{dependency}'")]
    #[diagnostic(
        code(healthgen::unsupported_type),
        help("supported types are: uri, sqlserver")
    )]
    UnsupportedType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        ty: String,
        dependency: String,
    },

    #[error("{message}")]
    #[diagnostic(code(healthgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_value() {
        let ctx = SourceContext::new("name: svc", "health.yml");
        let err = ctx.unsupported_type_error("redis", "cache", None);

        assert_eq!(
            err.to_string(),
            "unsupported dependency type 'redis' for dependency 'cache'"
        );
    }

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("name: svc", "health.yml");
        let err = ctx.validation_error("something is off");

        assert!(matches!(*err, Error::Validation { ref message, .. } if message == "something is off"));
    }

    #[test]
    fn test_named_source_keeps_filename() {
        let ctx = SourceContext::new("name: svc", "deploy/health.yml");
        assert_eq!(ctx.filename(), "deploy/health.yml");
        assert_eq!(ctx.src(), "name: svc");
    }
}
