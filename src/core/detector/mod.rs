//! # Detector Module
//!
//! Decides whether a screenshot shows the poem board's loading placeholder.
//!
//! ## How It Works
//! Two independent signals must agree before an image is flagged:
//! 1. **Center uniformity** - one of two boxes around the image center is
//!    almost entirely the placeholder green, with low channel spread
//! 2. **Sparse magnets** - fewer than [`MAGNET_PIXEL_THRESHOLD`] pixels across
//!    the whole image match the word-magnet gray
//!
//! A screenshot with a flat green center but many visible word tiles is a
//! legitimate sparse board, not a loading capture.
//!
//! ## Example
//! ```rust,ignore
//! use loading_screenshot_finder::core::detector::LoadingDetector;
//!
//! let result = LoadingDetector::new().classify_file(&path)?;
//! if result.is_loading {
//!     println!("{}", result.detail);
//! }
//! ```

mod classifier;
mod colors;
mod region;

pub use classifier::{count_magnet_pixels, Classification, LoadingDetector};
pub use colors::{
    squared_distance, BACKGROUND_GREEN, GREEN_DISTANCE_THRESHOLD, MAGNET_DISTANCE_THRESHOLD,
    MAGNET_GRAY,
};
pub use region::{
    Region, RegionStats, CENTER_BOTTOM_OFFSET, CENTER_TOP_OFFSET, GREEN_RATIO_THRESHOLD,
    REGION_HALF_WIDTH, STD_THRESHOLD, UPPER_CENTER_BOTTOM_OFFSET, UPPER_CENTER_TOP_OFFSET,
};

/// Minimum magnet-gray pixel count that marks a board as having loaded tiles
pub const MAGNET_PIXEL_THRESHOLD: u64 = 80_000;
