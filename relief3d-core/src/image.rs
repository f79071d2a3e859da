//! Explicit RGBA image descriptor

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A decoded RGBA pixel buffer with explicit dimensions
///
/// Four bytes per pixel, row-major. Every consumer of image data takes this
/// type, so inputs without an unambiguous width and height are
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Create a buffer from raw bytes, validating `4 * width * height`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the buffer
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The RGBA bytes of the pixel at a linear index
    ///
    /// Panics if `index >= pixel_count()`, like slice indexing.
    pub fn pixel(&self, index: usize) -> [u8; 4] {
        let offset = index * Self::BYTES_PER_PIXEL;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn dimensions_match(&self, other: &RgbaBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
}
