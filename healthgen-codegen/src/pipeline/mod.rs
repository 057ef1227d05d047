//! Lint pipeline run over a parsed definition.
//!
//! The loader already rejects anything that cannot be emitted. The lints in
//! this module report things that are legal but probably unintended, such as
//! two dependencies sharing a name. They never change the generated code.
//!
//! # Example
//!
//! ```ignore
//! use healthgen_codegen::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(definition)?;
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod lint;
pub mod lints;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use lint::{Lint, LintInfo};
pub use runner::Pipeline;
