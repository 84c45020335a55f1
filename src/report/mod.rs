//! Report rendering and file output

pub mod format;
pub mod writer;

pub use format::{format_report, ReportOptions, REPORT_TIMESTAMP_FORMAT, TOP_CONDITIONS_HEADING};
pub use writer::{ReportWriter, DEFAULT_REPORT_FILENAME};
