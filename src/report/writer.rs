//! Report file output
//!
//! Writes the rendered report to disk, replacing any previous run's
//! file. Failures are surfaced to the caller, who treats them as a
//! warning rather than aborting the check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{CheckerError, Result};

/// Report filename used when none is configured
pub const DEFAULT_REPORT_FILENAME: &str = "diagnosis_report.txt";

/// Writes the report to a fixed path
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ReportWriter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the report, overwriting any existing file
    pub fn write(&self, content: &str) -> Result<PathBuf> {
        fs::write(&self.path, content).map_err(|source| CheckerError::ReportWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path.clone())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let writer = ReportWriter::new(&path);
        let written = writer.write("hello report").unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello report");
    }

    #[test]
    fn test_write_overwrites_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let writer = ReportWriter::new(&path);
        writer.write("first run").unwrap();
        writer.write("second run").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second run");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("report.txt");

        let writer = ReportWriter::new(&path);
        let err = writer.write("content").unwrap_err();

        match err {
            CheckerError::ReportWrite { path: failed, .. } => {
                assert_eq!(failed, path);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");

        let err = ReportWriter::new(&path).write("content").unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }

    #[test]
    fn test_default_filename() {
        let writer = ReportWriter::default();
        assert_eq!(writer.path(), Path::new("diagnosis_report.txt"));
    }
}
