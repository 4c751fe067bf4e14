//! Report aggregation and persistence

mod error;
mod io;
mod report;
mod summary;

pub use error::ReportError;
pub use io::{atomic_write, read_report, write_report};
pub use report::{Report, ReportStats};
pub use summary::RunSummary;
