//! Slide decoding into pixel arrays and patch export back to image files

use crate::io::configuration::IMAGE_CHANNELS;
use crate::io::error::{PipelineError, Result};
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;

/// Decode an image file into a `(height, width, 3)` RGB array
///
/// Grayscale and alpha sources are converted to RGB so every buffer in the
/// cache has the same channel layout.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a supported image format
/// - The decoded pixel count does not match the reported dimensions
pub fn decode_rgb(path: &Path) -> Result<Array3<u8>> {
    let rgb = image::open(path)
        .map_err(|e| PipelineError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgb8();

    let (width, height) = rgb.dimensions();
    Array3::from_shape_vec(
        (height as usize, width as usize, IMAGE_CHANNELS),
        rgb.into_raw(),
    )
    .map_err(|e| PipelineError::InvalidImageData {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write an RGB patch to `output_path`, replacing any existing file
///
/// The encoder is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The patch does not have exactly three channels
/// - The image cannot be encoded or written to the specified path
pub fn save_patch(patch: &Array3<u8>, output_path: &Path) -> Result<()> {
    let (height, width, channels) = patch.dim();
    if channels != IMAGE_CHANNELS {
        return Err(PipelineError::InvalidPatch {
            path: output_path.to_path_buf(),
            reason: format!("expected {IMAGE_CHANNELS} channels, found {channels}"),
        });
    }

    // Iteration is in logical order, so sliced views need no layout fix-up
    let pixels: Vec<u8> = patch.iter().copied().collect();
    let img = RgbImage::from_raw(width as u32, height as u32, pixels).ok_or_else(|| {
        PipelineError::InvalidPatch {
            path: output_path.to_path_buf(),
            reason: format!("pixel buffer does not fit {width}x{height}"),
        }
    })?;

    img.save(output_path)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
