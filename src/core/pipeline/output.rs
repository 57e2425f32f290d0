//! Machine-readable batch output.

use super::executor::BatchReport;
use crate::core::cleanup::CleanupReport;
use crate::error::Result;
use crate::events::BatchSummary;
use serde::Serialize;

/// JSON document printed by `--output json`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub report: &'a BatchReport,
    pub summary: BatchSummary,
    pub cleanup: Option<&'a CleanupReport>,
}

impl<'a> JsonOutput<'a> {
    pub fn new(report: &'a BatchReport, cleanup: Option<&'a CleanupReport>) -> Self {
        Self {
            report,
            summary: report.summary(),
            cleanup,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// Paths that are not valid UTF-8 cannot be represented and come back as
    /// [`LoadingFinderError::Report`](crate::error::LoadingFinderError::Report).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
