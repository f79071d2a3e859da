//! Image loading and resampling

use crate::error::AcquisitionError;
use image::imageops::FilterType;
use relief3d_core::{Error, Result, RgbaBuffer};
use std::path::Path;
use tracing::debug;

/// Resampling filter used when depth and color dimensions differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampling {
    Nearest,
    #[default]
    Bilinear,
}

impl From<Resampling> for FilterType {
    fn from(resampling: Resampling) -> Self {
        match resampling {
            Resampling::Nearest => FilterType::Nearest,
            Resampling::Bilinear => FilterType::Triangle,
        }
    }
}

/// Load an image file and decode it to an RGBA buffer
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaBuffer> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AcquisitionError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let decoded = image::open(path)
        .map_err(AcquisitionError::Decode)?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    RgbaBuffer::new(width, height, decoded.into_raw())
}

/// Resample an RGBA buffer to new dimensions
///
/// Returns a clone when the dimensions already match.
pub fn resample(
    buffer: &RgbaBuffer,
    width: u32,
    height: u32,
    filter: Resampling,
) -> Result<RgbaBuffer> {
    if buffer.dimensions() == (width, height) {
        return Ok(buffer.clone());
    }

    let source = image::RgbaImage::from_raw(
        buffer.width(),
        buffer.height(),
        buffer.data().to_vec(),
    )
    .ok_or_else(|| {
        Error::from(AcquisitionError::InvalidBuffer {
            message: "byte length does not match dimensions".to_string(),
        })
    })?;

    let resized = image::imageops::resize(&source, width, height, filter.into());
    RgbaBuffer::new(width, height, resized.into_raw())
}

/// Load a color/depth image pair, resampling the depth source to the color
/// image's dimensions when they differ
pub fn load_image_pair<P: AsRef<Path>, Q: AsRef<Path>>(
    color_path: P,
    depth_path: Q,
) -> Result<(RgbaBuffer, RgbaBuffer)> {
    let color = load_rgba(color_path)?;
    let depth = load_rgba(depth_path)?;

    let depth = if depth.dimensions_match(&color) {
        depth
    } else {
        debug!(
            depth_width = depth.width(),
            depth_height = depth.height(),
            color_width = color.width(),
            color_height = color.height(),
            "resampling depth source to color dimensions"
        );
        resample(&depth, color.width(), color.height(), Resampling::Bilinear)?
    };

    Ok((color, depth))
}
