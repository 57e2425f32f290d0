//! # Cleanup Module
//!
//! Deletes screenshots flagged as loading captures so they never reach the
//! archive. Each deletion stands alone: one file that cannot be removed is
//! recorded and the pass moves on.

use crate::core::pipeline::LoadingScreenshot;
use crate::error::CleanupError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A deletion that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDeletion {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Files that were removed
    pub deleted: Vec<PathBuf>,
    /// Files that could not be removed
    pub failed: Vec<FailedDeletion>,
}

impl CleanupReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn delete_one(path: &Path) -> Result<(), CleanupError> {
    fs::remove_file(path).map_err(|e| CleanupError::DeleteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Delete every loading screenshot in `loading`
pub fn delete_loading(loading: &[LoadingScreenshot]) -> CleanupReport {
    let mut report = CleanupReport::default();

    for item in loading {
        match delete_one(&item.path) {
            Ok(()) => {
                info!(path = %item.path.display(), "deleted loading screenshot");
                report.deleted.push(item.path.clone());
            }
            Err(e) => {
                warn!(error = %e, "cleanup failed");
                report.failed.push(FailedDeletion {
                    path: item.path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loading(path: PathBuf) -> LoadingScreenshot {
        LoadingScreenshot {
            filename: path.file_name().unwrap().to_string_lossy().to_string(),
            path,
            detail: "magnet_pixels=0".to_string(),
        }
    }

    #[test]
    fn deletes_flagged_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024-06-01.png");
        fs::write(&path, b"png").unwrap();

        let report = delete_loading(&[loading(path.clone())]);

        assert!(!path.exists());
        assert_eq!(report.deleted, vec![path]);
        assert!(report.is_complete());
    }

    #[test]
    fn missing_file_is_recorded_and_pass_continues() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.png");
        let present = temp_dir.path().join("here.png");
        fs::write(&present, b"png").unwrap();

        let report = delete_loading(&[loading(missing.clone()), loading(present.clone())]);

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, missing);
        assert!(report.failed[0].message.contains("Could not delete"));
        assert_eq!(report.deleted, vec![present]);
        assert!(!report.is_complete());
    }
}
