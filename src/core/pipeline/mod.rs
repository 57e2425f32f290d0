//! # Pipeline Module
//!
//! Runs the loading detector over every screenshot in a directory.
//!
//! ## Stages
//! 1. **Scan** - Discover screenshots in the source directory
//! 2. **Classify** - Decode and classify each file
//! 3. **Bucket** - Sort results into loading / valid / errors
//!
//! ## Parallelism
//! Uses rayon to classify files across CPU cores. The detector is stateless,
//! so workers share nothing but the event sender. A file that fails to decode
//! is recorded as an error and the batch carries on.

mod executor;
mod output;

pub use executor::{BatchReport, BatchScan, BatchScanBuilder, FileError, LoadingScreenshot};
pub use output::JsonOutput;
