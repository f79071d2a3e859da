//! Pinhole projection of depth grids into camera space

use crate::params::{ReconstructionParams, DEPTH_CODE_RANGE};
use relief3d_core::{
    Aabb, DepthPoint3f, DepthPointCloud, Error, PixelGrid, Point3f, PointCloud, Result,
    RgbaBuffer,
};

/// Project every (pixel, depth) pair into a camera-space point
///
/// The output preserves the grid's linear pixel order, one point per pixel.
/// The bounding box is seeded from the first produced point and expanded
/// per axis in the same pass. Pure function of its inputs: repeated calls
/// yield bit-identical point sequences and bounds.
///
/// Fails with `DimensionMismatch` when the depth grid and color image
/// dimensions differ.
pub fn project(
    depth: &PixelGrid<u32>,
    image: &RgbaBuffer,
    params: &ReconstructionParams,
) -> Result<(DepthPointCloud, Aabb)> {
    if depth.dimensions() != image.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: image.pixel_count(),
            actual: depth.len(),
        });
    }

    let width = image.width() as usize;
    let ox = image.width() as f32 / 2.0;
    let oy = image.height() as f32 / 2.0;

    let mut cloud = PointCloud::with_capacity(depth.len());
    let mut bounds: Option<Aabb> = None;

    for (i, &code) in depth.iter().enumerate() {
        let normalized = f64::from(code) / DEPTH_CODE_RANGE;
        let z = params.depth_to_z(normalized);

        let u = (i % width) as f32;
        let v = (i / width) as f32;
        let x = -(u - ox) * z * params.focal;
        let y = (v - oy) * z * params.focal;
        let position = Point3f::new(x, y, z);

        match bounds.as_mut() {
            Some(aabb) => aabb.expand(&position),
            None => bounds = Some(Aabb::from_point(position)),
        }

        let [r, g, b, _] = image.pixel(i);
        cloud.push(DepthPoint3f::new(
            position,
            [
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            ],
            params.point_size(z),
        ));
    }

    let bounds = bounds.unwrap_or_else(|| Aabb::from_point(Point3f::origin()));
    Ok((cloud, bounds))
}
