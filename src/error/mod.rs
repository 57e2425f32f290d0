//! # Error Module
//!
//! Error types for the loading screenshot finder.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Per-file failures stay per-file** - a bad image never aborts a batch

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum LoadingFinderError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors that occur while enumerating screenshot files
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while turning a file or buffer into an RGB raster
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to open image file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Image is empty: {path}")]
    EmptyImage { path: PathBuf },
}

impl DecodeError {
    /// Path of the image that failed to decode
    pub fn path(&self) -> &PathBuf {
        match self {
            DecodeError::Io { path, .. }
            | DecodeError::Malformed { path, .. }
            | DecodeError::EmptyImage { path } => path,
        }
    }
}

/// Errors that occur while deleting loading screenshots
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Could not delete {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, LoadingFinderError>;
