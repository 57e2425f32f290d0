//! # Core Module
//!
//! The loading screenshot detection engine.
//!
//! ## Modules
//! - `decode` - Turns screenshot files into RGB rasters
//! - `detector` - Classifies a raster as loading placeholder or real content
//! - `scanner` - Discovers screenshots in a directory
//! - `pipeline` - Classifies a whole directory in parallel
//! - `cleanup` - Deletes flagged screenshots

pub mod cleanup;
pub mod decode;
pub mod detector;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use cleanup::{delete_loading, CleanupReport};
pub use decode::ImageDecoder;
pub use detector::{Classification, LoadingDetector};
pub use pipeline::{BatchReport, BatchScan, LoadingScreenshot};
pub use scanner::ScreenshotFile;
