//! Core utilities and types for the healthgen generator.
//!
//! This crate provides the generated-file abstraction shared by the
//! code generators and the command line host.

mod file;

pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
