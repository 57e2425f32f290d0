//! Reference colors and RGB distance.

use image::Rgb;

/// Fill color of the loading placeholder box
pub const BACKGROUND_GREEN: Rgb<u8> = Rgb([208, 225, 214]);

/// Background color of a rendered word magnet
pub const MAGNET_GRAY: Rgb<u8> = Rgb([239, 239, 239]);

/// A pixel counts as placeholder green when its distance is strictly below this
pub const GREEN_DISTANCE_THRESHOLD: f64 = 15.0;

/// A pixel counts as magnet gray when its distance is at most this
pub const MAGNET_DISTANCE_THRESHOLD: f64 = 10.0;

/// Squared Euclidean distance between two colors in plain RGB space.
///
/// Thresholds are compared against the squared value so the per-pixel hot
/// loop stays in integer arithmetic.
#[inline]
pub fn squared_distance(a: &Rgb<u8>, b: &Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// `distance < threshold`, evaluated on squared values
#[inline]
pub(crate) fn within_strict(a: &Rgb<u8>, b: &Rgb<u8>, threshold: f64) -> bool {
    (squared_distance(a, b) as f64) < threshold * threshold
}

/// `distance <= threshold`, evaluated on squared values
#[inline]
pub(crate) fn within_inclusive(a: &Rgb<u8>, b: &Rgb<u8>, threshold: f64) -> bool {
    (squared_distance(a, b) as f64) <= threshold * threshold
}
