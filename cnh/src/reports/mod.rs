//! Report data structures for commands.
//!
//! Flows build reports, then render them to an Output target.

mod hasura;
mod init;
mod manual;
mod output;

pub use hasura::HasuraReport;
pub use init::InitReport;
pub use manual::ManualConfigReport;
pub use output::{Output, Report, TerminalOutput};
