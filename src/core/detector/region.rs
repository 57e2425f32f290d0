//! Rectangular sample regions and their color statistics.

use image::RgbImage;

use super::colors::{within_strict, BACKGROUND_GREEN, GREEN_DISTANCE_THRESHOLD};

/// Horizontal half-width of both center regions, in pixels
pub const REGION_HALF_WIDTH: i64 = 400;

/// Upper-center region spans `[cy - 400, cy - 100)`
pub const UPPER_CENTER_TOP_OFFSET: i64 = -400;
pub const UPPER_CENTER_BOTTOM_OFFSET: i64 = -100;

/// Center region spans `[cy - 100, cy + 100)`
pub const CENTER_TOP_OFFSET: i64 = -100;
pub const CENTER_BOTTOM_OFFSET: i64 = 100;

/// Share of placeholder-green pixels a region needs (strictly above)
pub const GREEN_RATIO_THRESHOLD: f64 = 0.90;

/// Mean per-channel standard deviation a region must stay under
pub const STD_THRESHOLD: f64 = 20.0;

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
///
/// Coordinates may be negative or past the image edge until [`Region::clamp`]
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Region {
    /// Region horizontally centered on `cx` spanning `[cy + top, cy + bottom)`
    pub fn centered(cx: i64, cy: i64, top_offset: i64, bottom_offset: i64) -> Self {
        Self {
            left: cx - REGION_HALF_WIDTH,
            top: cy + top_offset,
            right: cx + REGION_HALF_WIDTH,
            bottom: cy + bottom_offset,
        }
    }

    /// The upper-center and center regions for an image, in evaluation order
    pub fn center_regions(width: u32, height: u32) -> [Region; 2] {
        let cx = (width / 2) as i64;
        let cy = (height / 2) as i64;
        [
            Region::centered(cx, cy, UPPER_CENTER_TOP_OFFSET, UPPER_CENTER_BOTTOM_OFFSET),
            Region::centered(cx, cy, CENTER_TOP_OFFSET, CENTER_BOTTOM_OFFSET),
        ]
    }

    /// Clamp to `[0, width) x [0, height)`.
    ///
    /// A region lying entirely outside the image collapses to zero area.
    pub fn clamp(&self, width: u32, height: u32) -> Region {
        let (w, h) = (width as i64, height as i64);
        let left = self.left.clamp(0, w);
        let top = self.top.clamp(0, h);
        Region {
            left,
            top,
            right: self.right.clamp(left, w),
            bottom: self.bottom.clamp(top, h),
        }
    }

    pub fn width(&self) -> u64 {
        (self.right - self.left).max(0) as u64
    }

    pub fn height(&self) -> u64 {
        (self.bottom - self.top).max(0) as u64
    }

    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }
}

/// Color statistics of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    /// Pixels inside the clamped region
    pub pixel_count: u64,
    /// Fraction of pixels close to the placeholder green
    pub green_ratio: f64,
    /// Mean over R, G, B of each channel's population standard deviation
    pub avg_std: f64,
}

impl RegionStats {
    /// Measure a region of `image`, clamping it to the image bounds first.
    pub fn measure(image: &RgbImage, region: Region) -> Self {
        let region = region.clamp(image.width(), image.height());
        let pixel_count = region.area();

        if pixel_count == 0 {
            return Self {
                pixel_count: 0,
                green_ratio: 0.0,
                avg_std: 0.0,
            };
        }

        let mut green = 0u64;
        let mut sums = [0u64; 3];
        let mut squares = [0u64; 3];

        for y in region.top as u32..region.bottom as u32 {
            for x in region.left as u32..region.right as u32 {
                let pixel = image.get_pixel(x, y);
                if within_strict(pixel, &BACKGROUND_GREEN, GREEN_DISTANCE_THRESHOLD) {
                    green += 1;
                }
                for (c, &value) in pixel.0.iter().enumerate() {
                    let v = value as u64;
                    sums[c] += v;
                    squares[c] += v * v;
                }
            }
        }

        let n = pixel_count as f64;
        let avg_std = (0..3)
            .map(|c| {
                let mean = sums[c] as f64 / n;
                let variance = (squares[c] as f64 / n - mean * mean).max(0.0);
                variance.sqrt()
            })
            .sum::<f64>()
            / 3.0;

        Self {
            pixel_count,
            green_ratio: green as f64 / n,
            avg_std,
        }
    }

    /// Whether this region looks like the flat loading placeholder
    pub fn is_uniform_green(&self) -> bool {
        self.pixel_count > 0 && self.green_ratio > GREEN_RATIO_THRESHOLD && self.avg_std < STD_THRESHOLD
    }
}
