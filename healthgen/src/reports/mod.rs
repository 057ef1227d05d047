//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{
    DefinitionSummary, GenerateReport, GenerationResult, NotConfigured, NotConfiguredResult,
    PreviewResult, WrittenResult,
};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::testing;
