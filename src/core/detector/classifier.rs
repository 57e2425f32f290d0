//! The loading-state classifier.

use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::colors::{within_inclusive, MAGNET_DISTANCE_THRESHOLD, MAGNET_GRAY};
use super::region::{Region, RegionStats};
use super::MAGNET_PIXEL_THRESHOLD;
use crate::core::decode::ImageDecoder;
use crate::error::DecodeError;

/// Verdict for a single screenshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// True when the screenshot captured the loading placeholder
    pub is_loading: bool,
    /// Diagnostic summary, e.g. `magnet_pixels=1,234`; empty when not loading
    pub detail: String,
    /// Magnet-gray pixel count, present only when the count was taken
    pub magnet_pixels: Option<u64>,
}

impl Classification {
    fn not_loading(magnet_pixels: Option<u64>) -> Self {
        Self {
            is_loading: false,
            detail: String::new(),
            magnet_pixels,
        }
    }

    fn loading(magnet_pixels: u64) -> Self {
        Self {
            is_loading: true,
            detail: format!("magnet_pixels={}", group_thousands(magnet_pixels)),
            magnet_pixels: Some(magnet_pixels),
        }
    }
}

/// Stateless classifier for loading-placeholder screenshots.
///
/// Holds no data between calls, so one instance can be shared across
/// threads and results never depend on the order images are fed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingDetector;

impl LoadingDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify a screenshot file
    pub fn classify_file(&self, path: &Path) -> Result<Classification, DecodeError> {
        let image = ImageDecoder::decode_file(path)?;
        let result = self.classify(&image);
        debug!(
            path = %path.display(),
            is_loading = result.is_loading,
            magnet_pixels = ?result.magnet_pixels,
            "classified screenshot"
        );
        Ok(result)
    }

    /// Classify a decoded image of any channel layout.
    ///
    /// Alpha is dropped and grayscale expanded before any statistics are taken.
    pub fn classify(&self, image: &DynamicImage) -> Classification {
        match image {
            DynamicImage::ImageRgb8(rgb) => self.classify_rgb(rgb),
            other => self.classify_rgb(&other.to_rgb8()),
        }
    }

    /// Classify an RGB raster
    pub fn classify_rgb(&self, image: &RgbImage) -> Classification {
        if !self.center_is_uniform_green(image) {
            return Classification::not_loading(None);
        }

        let magnet_pixels = count_magnet_pixels(image);
        if magnet_pixels >= MAGNET_PIXEL_THRESHOLD {
            return Classification::not_loading(Some(magnet_pixels));
        }

        Classification::loading(magnet_pixels)
    }

    /// Upper-center then center region; the first uniform one wins
    fn center_is_uniform_green(&self, image: &RgbImage) -> bool {
        Region::center_regions(image.width(), image.height())
            .into_iter()
            .any(|region| RegionStats::measure(image, region).is_uniform_green())
    }
}

/// Count pixels across the whole image that match the word-magnet gray
pub fn count_magnet_pixels(image: &RgbImage) -> u64 {
    image
        .pixels()
        .filter(|pixel| within_inclusive(pixel, &MAGNET_GRAY, MAGNET_DISTANCE_THRESHOLD))
        .count() as u64
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detector::BACKGROUND_GREEN;
    use image::{Rgb, Rgba, RgbaImage};

    /// 1000x1000 board; both center regions live in rows 100..600
    const SIZE: u32 = 1000;

    fn green_board() -> RgbImage {
        RgbImage::from_pixel(SIZE, SIZE, BACKGROUND_GREEN)
    }

    /// Paint `count` magnet pixels row-major starting below the center regions
    fn paint_magnets_below_center(image: &mut RgbImage, count: u64) {
        let mut painted = 0;
        'rows: for y in 600..image.height() {
            for x in 0..image.width() {
                if painted == count {
                    break 'rows;
                }
                image.put_pixel(x, y, MAGNET_GRAY);
                painted += 1;
            }
        }
        assert_eq!(painted, count, "board too small for requested magnets");
    }

    fn noise_board() -> RgbImage {
        // Deterministic xorshift noise
        let mut state: u32 = 0x9E37_79B9;
        RgbImage::from_fn(SIZE, SIZE, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            Rgb([r, g, b])
        })
    }

    #[test]
    fn solid_green_is_loading() {
        let result = LoadingDetector::new().classify_rgb(&green_board());

        assert!(result.is_loading);
        assert_eq!(result.magnet_pixels, Some(0));
        assert_eq!(result.detail, "magnet_pixels=0");
    }

    #[test]
    fn many_magnets_is_not_loading() {
        let mut image = green_board();
        paint_magnets_below_center(&mut image, 100_000);

        let result = LoadingDetector::new().classify_rgb(&image);

        assert!(!result.is_loading);
        assert!(result.detail.is_empty());
        assert_eq!(result.magnet_pixels, Some(100_000));
    }

    #[test]
    fn magnet_threshold_boundary() {
        let detector = LoadingDetector::new();

        let mut below = green_board();
        paint_magnets_below_center(&mut below, MAGNET_PIXEL_THRESHOLD - 1);
        let result = detector.classify_rgb(&below);
        assert!(result.is_loading);
        assert_eq!(result.detail, "magnet_pixels=79,999");

        let mut at = green_board();
        paint_magnets_below_center(&mut at, MAGNET_PIXEL_THRESHOLD);
        assert!(!detector.classify_rgb(&at).is_loading);
    }

    #[test]
    fn noise_is_not_loading_and_skips_magnet_count() {
        let result = LoadingDetector::new().classify_rgb(&noise_board());

        assert!(!result.is_loading);
        assert!(result.detail.is_empty());
        assert_eq!(result.magnet_pixels, None);
    }

    #[test]
    fn magnet_gray_board_is_not_loading() {
        let image = RgbImage::from_pixel(SIZE, SIZE, MAGNET_GRAY);
        let result = LoadingDetector::new().classify_rgb(&image);

        assert!(!result.is_loading);
        assert_eq!(result.magnet_pixels, None);
    }

    #[test]
    fn upper_center_alone_is_enough() {
        // Center region covered in white tiles, upper-center still green
        let mut image = green_board();
        for y in 400..600 {
            for x in 100..900 {
                image.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }

        assert!(LoadingDetector::new().classify_rgb(&image).is_loading);
    }

    #[test]
    fn center_alone_is_enough() {
        let mut image = green_board();
        for y in 100..400 {
            for x in 100..900 {
                image.put_pixel(x, y, Rgb([40, 40, 40]));
            }
        }

        assert!(LoadingDetector::new().classify_rgb(&image).is_loading);
    }

    #[test]
    fn content_in_both_regions_is_not_loading() {
        let mut image = green_board();
        for y in 100..600 {
            for x in 100..900 {
                if (x / 20 + y / 20) % 2 == 0 {
                    image.put_pixel(x, y, Rgb([20, 20, 20]));
                }
            }
        }

        assert!(!LoadingDetector::new().classify_rgb(&image).is_loading);
    }

    #[test]
    fn classification_is_deterministic() {
        let detector = LoadingDetector::new();
        let mut image = green_board();
        paint_magnets_below_center(&mut image, 1_234);

        let first = detector.classify_rgb(&image);
        let second = detector.classify_rgb(&image);

        assert_eq!(first, second);
        assert_eq!(first.detail, "magnet_pixels=1,234");
    }

    #[test]
    fn alpha_channel_does_not_change_verdict() {
        let detector = LoadingDetector::new();
        let [r, g, b] = BACKGROUND_GREEN.0;

        for alpha in [255u8, 128, 0] {
            let rgba = RgbaImage::from_pixel(SIZE, SIZE, Rgba([r, g, b, alpha]));
            let result = detector.classify(&DynamicImage::ImageRgba8(rgba));
            assert_eq!(result, detector.classify_rgb(&green_board()));
        }
    }

    #[test]
    fn small_image_is_clamped_not_rejected() {
        let image = RgbImage::from_pixel(40, 30, BACKGROUND_GREEN);
        assert!(LoadingDetector::new().classify_rgb(&image).is_loading);
    }

    #[test]
    fn zero_sized_image_is_not_loading() {
        let image = RgbImage::new(0, 0);
        assert!(!LoadingDetector::new().classify_rgb(&image).is_loading);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(79_999), "79,999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
