//! Batch scan execution.

use crate::core::detector::{Classification, LoadingDetector};
use crate::core::scanner::{ScanConfig, ScreenshotFile, ScreenshotScanner, WalkDirScanner};
use crate::error::{LoadingFinderError, ScanError};
use crate::events::{
    null_sender, BatchEvent, BatchSummary, ClassifyEvent, ClassifyProgress, Event, EventSender,
};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// A screenshot flagged as a loading capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingScreenshot {
    /// Full path to the screenshot
    pub path: PathBuf,
    /// Just the filename
    pub filename: String,
    /// Detector diagnostics, e.g. `magnet_pixels=1,234`
    pub detail: String,
}

/// A file that could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a batch scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Directory that was scanned
    pub source: PathBuf,
    /// When the scan started
    pub scanned_at: DateTime<Utc>,
    /// Screenshots found in the directory
    pub total_files: usize,
    /// Screenshots that captured the loading placeholder, sorted by path
    pub loading: Vec<LoadingScreenshot>,
    /// Screenshots that showed real content, sorted by path
    pub valid: Vec<PathBuf>,
    /// Files that failed to decode, sorted by path
    pub errors: Vec<FileError>,
    /// Directory-level problems (missing source, unreadable entries)
    pub warnings: Vec<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl BatchReport {
    fn empty(source: PathBuf, scanned_at: DateTime<Utc>) -> Self {
        Self {
            source,
            scanned_at,
            total_files: 0,
            loading: Vec::new(),
            valid: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Whether any loading screenshot was found
    pub fn has_loading(&self) -> bool {
        !self.loading.is_empty()
    }

    /// Process exit status for this report.
    ///
    /// Loading screenshots fail a check run; a delete run that removes them
    /// succeeds.
    pub fn exit_code(&self, deleting: bool) -> u8 {
        if self.has_loading() && !deleting {
            1
        } else {
            0
        }
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total_files: self.total_files,
            loading: self.loading.len(),
            valid: self.valid.len(),
            errors: self.errors.len(),
            duration_ms: self.duration_ms,
        }
    }
}

/// Builder for a batch scan
pub struct BatchScanBuilder {
    source: PathBuf,
    scan_config: ScanConfig,
    detector: LoadingDetector,
}

impl BatchScanBuilder {
    pub fn new() -> Self {
        Self {
            source: PathBuf::from("."),
            scan_config: ScanConfig::default(),
            detector: LoadingDetector::new(),
        }
    }

    /// Directory of screenshots to classify
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Set scanner configuration
    pub fn scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// Restrict the scan to these extensions
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.scan_config.extensions = Some(extensions);
        self
    }

    /// Include hidden files
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.scan_config.include_hidden = include;
        self
    }

    pub fn build(self) -> BatchScan {
        BatchScan {
            source: self.source,
            scanner: WalkDirScanner::new(self.scan_config),
            detector: self.detector,
        }
    }
}

impl Default for BatchScanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome for one file, before bucketing
enum Outcome {
    Classified(ScreenshotFile, Classification),
    Failed(ScreenshotFile, String),
}

/// Classifies every screenshot in one directory
pub struct BatchScan {
    source: PathBuf,
    scanner: WalkDirScanner,
    detector: LoadingDetector,
}

impl BatchScan {
    pub fn builder() -> BatchScanBuilder {
        BatchScanBuilder::new()
    }

    /// Run the scan without events
    pub fn run(&self) -> Result<BatchReport, LoadingFinderError> {
        self.run_with_events(&null_sender())
    }

    /// Run the scan with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<BatchReport, LoadingFinderError> {
        let start_time = Instant::now();
        let mut report = BatchReport::empty(self.source.clone(), Utc::now());

        events.send(Event::Batch(BatchEvent::Started));

        let scan = match self.scanner.scan_with_events(&self.source, events) {
            Ok(scan) => scan,
            Err(error @ ScanError::DirectoryNotFound { .. }) => {
                warn!(source = %self.source.display(), "{}", error);
                report.warnings.push(error.to_string());
                report.duration_ms = start_time.elapsed().as_millis() as u64;
                events.send(Event::Batch(BatchEvent::Completed {
                    summary: report.summary(),
                }));
                return Ok(report);
            }
            Err(error) => return Err(error.into()),
        };

        report
            .warnings
            .extend(scan.errors.iter().map(|e| e.to_string()));

        let files = scan.files;
        let total = files.len();
        report.total_files = total;

        events.send(Event::Classify(ClassifyEvent::Started { total_files: total }));

        let completed = AtomicUsize::new(0);

        // Indexed collect keeps the scanner's path order
        let outcomes: Vec<Outcome> = files
            .into_par_iter()
            .map(|file| {
                let outcome = match self.detector.classify_file(&file.path) {
                    Ok(classification) => {
                        if classification.is_loading {
                            events.send(Event::Classify(ClassifyEvent::LoadingFound {
                                path: file.path.clone(),
                                detail: classification.detail.clone(),
                            }));
                        }
                        Outcome::Classified(file, classification)
                    }
                    Err(e) => {
                        warn!(path = %file.path.display(), error = %e, "could not read screenshot");
                        events.send(Event::Classify(ClassifyEvent::Error {
                            path: file.path.clone(),
                            message: e.to_string(),
                        }));
                        Outcome::Failed(file, e.to_string())
                    }
                };

                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                let current_path = match &outcome {
                    Outcome::Classified(f, _) | Outcome::Failed(f, _) => f.path.clone(),
                };
                events.send(Event::Classify(ClassifyEvent::Progress(ClassifyProgress {
                    completed: done,
                    total,
                    current_path,
                })));

                outcome
            })
            .collect();

        for outcome in outcomes {
            match outcome {
                Outcome::Classified(file, classification) if classification.is_loading => {
                    let filename = file
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    report.loading.push(LoadingScreenshot {
                        path: file.path,
                        filename,
                        detail: classification.detail,
                    });
                }
                Outcome::Classified(file, _) => report.valid.push(file.path),
                Outcome::Failed(file, message) => report.errors.push(FileError {
                    path: file.path,
                    message,
                }),
            }
        }

        events.send(Event::Classify(ClassifyEvent::Completed {
            loading: report.loading.len(),
            valid: report.valid.len(),
            errors: report.errors.len(),
        }));

        report.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            source = %self.source.display(),
            total = report.total_files,
            loading = report.loading.len(),
            valid = report.valid.len(),
            errors = report.errors.len(),
            "batch scan complete"
        );

        events.send(Event::Batch(BatchEvent::Completed {
            summary: report.summary(),
        }));

        Ok(report)
    }
}
