//! Point-cloud geometry assembly

use relief3d_core::{DepthPointCloud, Error, PointCloudGeometry, Result};

/// Flatten a projected point sequence into parallel render arrays
///
/// Emits positions (3N floats), colors (3N floats) and sizes (N floats) for
/// `N = width * height`, with no connectivity. Fails with
/// `DimensionMismatch` when the point count does not cover the grid.
pub fn build_point_cloud(
    points: &DepthPointCloud,
    width: u32,
    height: u32,
) -> Result<PointCloudGeometry> {
    let expected = width as usize * height as usize;
    if points.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: points.len(),
        });
    }

    let mut positions = Vec::with_capacity(expected * 3);
    let mut colors = Vec::with_capacity(expected * 3);
    let mut sizes = Vec::with_capacity(expected);

    for point in points {
        positions.extend_from_slice(&[
            point.position.x,
            point.position.y,
            point.position.z,
        ]);
        colors.extend_from_slice(&point.color);
        sizes.push(point.size);
    }

    PointCloudGeometry::new(positions, colors, sizes)
}
