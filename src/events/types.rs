//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by a batch scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// File discovery events
    Scan(ScanEvent),
    /// Per-file classification events
    Classify(ClassifyEvent),
    /// Batch-level events
    Batch(BatchEvent),
}

/// Events during file discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Scanning has started
    Started { root: PathBuf },
    /// A screenshot was found
    FileFound { path: PathBuf },
    /// An error occurred but scanning continues
    Error { path: PathBuf, message: String },
    /// Scanning completed
    Completed { total_files: usize },
}

/// Events during classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClassifyEvent {
    /// Classification has started
    Started { total_files: usize },
    /// Progress update after each file
    Progress(ClassifyProgress),
    /// A screenshot was flagged as a loading capture
    LoadingFound { path: PathBuf, detail: String },
    /// A file could not be decoded; the batch continues
    Error { path: PathBuf, message: String },
    /// Classification completed
    Completed { loading: usize, valid: usize, errors: usize },
}

/// Progress information during classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyProgress {
    /// Number of files classified so far
    pub completed: usize,
    /// Total number of files to classify
    pub total: usize,
    /// File that just finished
    pub current_path: PathBuf,
}

/// Batch-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BatchEvent {
    /// Batch has started
    Started,
    /// Batch completed
    Completed { summary: BatchSummary },
}

/// Summary of a batch scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Screenshots found in the source directory
    pub total_files: usize,
    /// Screenshots flagged as loading captures
    pub loading: usize,
    /// Screenshots that showed real content
    pub valid: usize,
    /// Files that could not be decoded
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}
