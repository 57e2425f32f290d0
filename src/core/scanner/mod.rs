//! # Scanner Module
//!
//! Discovers screenshot files in an archive directory.
//!
//! Screenshots land flat in one directory per capture target, so by default
//! only the top level is scanned and only PNG / JPEG files are picked up.
//!
//! ## Example
//! ```rust,ignore
//! use loading_screenshot_finder::core::scanner::{ScanConfig, ScreenshotScanner, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! let found = scanner.scan(Path::new("fridge-poem"))?;
//! ```

mod filter;
mod walker;

pub use filter::ImageFilter;
pub use walker::{ScanConfig, WalkDirScanner};

use crate::error::ScanError;
use crate::events::EventSender;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions recognized when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// A discovered screenshot file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotFile {
    /// Path to the screenshot
    pub path: PathBuf,
}

/// Result of a scan operation
#[derive(Debug)]
pub struct ScanResult {
    /// Discovered screenshots, sorted by path
    pub files: Vec<ScreenshotFile>,
    /// Errors that occurred during scanning (non-fatal)
    pub errors: Vec<ScanError>,
}

/// Trait for screenshot scanners
///
/// Implement this trait to create custom scanners (e.g., for testing).
pub trait ScreenshotScanner: Send + Sync {
    /// Scan a directory and return discovered screenshots
    fn scan(&self, root: &Path) -> Result<ScanResult, ScanError>;

    /// Scan with progress reporting via events
    fn scan_with_events(&self, root: &Path, events: &EventSender)
        -> Result<ScanResult, ScanError>;
}
