//! Shared code generation utilities for the healthgen generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (e.g., `healthgen-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - The [`LanguageCodegen`](language::LanguageCodegen) trait and its results
//! - [`pipeline`] - Lints and diagnostics run over a parsed definition
//! - [`generation`] - Files shared by every target (the starter `health.yml`)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
