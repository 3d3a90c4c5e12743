//! Loading of benchmark reports from disk.

use super::report_types::Report;
use crate::errors::{ConversionError, ConversionResult};
use log::info;
use std::fs;
use std::path::Path;

/// Reads google-benchmark JSON reports.
pub struct ReportLoader;

impl ReportLoader {
    /// Load and parse the report stored at `path`.
    pub fn load(path: &Path) -> ConversionResult<Report> {
        let content = fs::read_to_string(path).map_err(|e| ConversionError::ReportRead {
            path: path.display().to_string(),
            source: e,
        })?;

        let report = Self::parse(&content, &path.display().to_string())?;
        info!(
            "Loaded report '{}' with {} benchmarks",
            path.display(),
            report.benchmarks.len()
        );
        Ok(report)
    }

    /// Parse report JSON held in memory. `origin` only labels parse errors.
    pub fn parse(content: &str, origin: &str) -> ConversionResult<Report> {
        serde_json::from_str(content).map_err(|e| ConversionError::ReportParse {
            path: origin.to_string(),
            source: e,
        })
    }
}
