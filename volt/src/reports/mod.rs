//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod create_module;
mod output;

pub use create_module::CreateModuleReport;
pub use output::{Output, Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::RecordingOutput;
