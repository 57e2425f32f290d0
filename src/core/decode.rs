//! Image decoding with format-specific fast paths.
//!
//! Uses zune-jpeg for JPEG files (1.5-2x faster than the image crate on
//! full-page captures) and falls back to the image crate for everything else.
//! Non-JPEG formats are guessed from file content, so a mislabelled capture
//! still decodes.

use crate::error::DecodeError;
use image::{DynamicImage, ImageBuffer, ImageReader, Luma, Rgb, Rgba};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

/// Placeholder path reported for in-memory buffers
const MEMORY_SOURCE: &str = "<memory>";

fn is_jpeg_path(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("jpg" | "jpeg")
    )
}

/// Decoder that turns screenshot files into rasters
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an image file.
    ///
    /// - JPEG: zune-jpeg, falling back to the image crate if it rejects the file
    /// - Other formats: image crate with content sniffing
    pub fn decode_file(path: &Path) -> Result<DynamicImage, DecodeError> {
        let bytes = fs::read(path).map_err(|e| DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let image = if is_jpeg_path(path) {
            Self::decode_jpeg(path, &bytes).or_else(|_| Self::decode_generic(path, &bytes))?
        } else {
            Self::decode_generic(path, &bytes)?
        };

        Self::ensure_not_empty(path, image)
    }

    /// Decode an in-memory image buffer, guessing the format from content.
    pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
        let path = Path::new(MEMORY_SOURCE);
        let image = Self::decode_generic(path, bytes)?;
        Self::ensure_not_empty(path, image)
    }

    fn ensure_not_empty(path: &Path, image: DynamicImage) -> Result<DynamicImage, DecodeError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(DecodeError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        Ok(image)
    }

    /// Fast JPEG decoding using zune-jpeg
    fn decode_jpeg(path: &Path, bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
        let malformed = |reason: String| DecodeError::Malformed {
            path: path.to_path_buf(),
            reason,
        };

        let options = DecoderOptions::new_fast().jpeg_set_out_colorspace(ColorSpace::RGB);
        let mut decoder = JpegDecoder::new_with_options(bytes, options);

        let pixels = decoder
            .decode()
            .map_err(|e| malformed(format!("zune-jpeg decode failed: {:?}", e)))?;

        let info = decoder
            .info()
            .ok_or_else(|| malformed("Failed to get image info".to_string()))?;

        let width = info.width as u32;
        let height = info.height as u32;

        let image = match decoder.get_output_colorspace().unwrap_or(ColorSpace::RGB) {
            ColorSpace::RGB => {
                let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels)
                        .ok_or_else(|| malformed("Failed to create RGB buffer".to_string()))?;
                DynamicImage::ImageRgb8(buffer)
            }
            ColorSpace::RGBA => {
                let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels)
                        .ok_or_else(|| malformed("Failed to create RGBA buffer".to_string()))?;
                DynamicImage::ImageRgba8(buffer)
            }
            ColorSpace::Luma => {
                let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels)
                        .ok_or_else(|| malformed("Failed to create Luma buffer".to_string()))?;
                DynamicImage::ImageLuma8(buffer)
            }
            other => {
                return Err(malformed(format!("unsupported JPEG colorspace {:?}", other)));
            }
        };

        Ok(image)
    }

    /// Content-sniffing decode via the image crate
    fn decode_generic(path: &Path, bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .decode()
            .map_err(|e| DecodeError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}
