//! Depth image decoding

use rand::Rng;
use relief3d_core::{PixelGrid, RgbaBuffer};
use tracing::{debug, warn};

/// Number of random pixels sampled by the grayscale diagnostic
const GRAY_SAMPLE_COUNT: usize = 5;

/// Recover per-pixel depth codes from a packed RGBA depth image
///
/// Each pixel's four channel bytes are reinterpreted as one little-endian
/// unsigned 32-bit depth code; the packing order is fixed and no byte-order
/// negotiation happens. The output grid matches the input dimensions, which
/// requires the depth source to have been resampled to the color image's
/// size beforehand (see `relief3d-io`).
///
/// The decoded output is a pure function of the input bytes; the random
/// grayscale sampling below feeds a log line and nothing else.
pub fn decode_depth(depth: &RgbaBuffer) -> PixelGrid<u32> {
    grayscale_sanity_check(depth);

    let data = depth.data();
    PixelGrid::from_fn(depth.width(), depth.height(), |i| {
        let offset = i * RgbaBuffer::BYTES_PER_PIXEL;
        u32::from_le_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    })
}

/// Warn when sampled depth pixels are not grayscale
///
/// Packed depth sources are usually gray; colored samples suggest the wrong
/// image was passed as depth. Diagnostic only — never gates reconstruction.
fn grayscale_sanity_check(depth: &RgbaBuffer) {
    let pixel_count = depth.pixel_count();
    if pixel_count == 0 {
        return;
    }

    let mut rng = rand::thread_rng();
    let mut gray = 0;
    for _ in 0..GRAY_SAMPLE_COUNT {
        let [r, g, b, _] = depth.pixel(rng.gen_range(0..pixel_count));
        if r == g && g == b {
            gray += 1;
        }
    }

    if gray < GRAY_SAMPLE_COUNT {
        warn!(
            gray,
            samples = GRAY_SAMPLE_COUNT,
            "depth image samples are not grayscale"
        );
    } else {
        debug!(samples = GRAY_SAMPLE_COUNT, "depth grayscale check passed");
    }
}
