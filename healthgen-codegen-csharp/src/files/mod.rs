mod extensions_cs;

pub use extensions_cs::{
    EXTENSIONS_CLASS, EXTENSIONS_FILENAME, GENERATED_HEADER, HealthChecksExtensionsCs,
    REGISTRATION_METHOD,
};

use crate::Using;

/// Using directives shared by generated files.
pub mod usings {
    use super::Using;

    /// `using System;` for `Uri`.
    pub fn system() -> Using {
        Using::new("System")
    }

    /// `using Microsoft.Extensions.DependencyInjection;` for the
    /// `IServiceCollection` and health check builder extensions.
    pub fn dependency_injection() -> Using {
        Using::new("Microsoft.Extensions.DependencyInjection")
    }
}
