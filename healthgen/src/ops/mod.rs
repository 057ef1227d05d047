//! Core operations.
//!
//! This module contains the business logic for healthgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clear;
pub mod generate;

pub use check::check;
pub use clear::clear;
pub use generate::{GenerateOptions, generate};
