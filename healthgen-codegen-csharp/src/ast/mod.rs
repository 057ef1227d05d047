//! Small C# syntax builders.

mod chains;
mod types;

pub use chains::MethodChain;
pub use types::{Class, Method};
