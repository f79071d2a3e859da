//! Core traits for relief3d

use crate::{bounds::Aabb, mesh::*, point::*, point_cloud::*};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> Aabb;

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        self.bounding_box().center()
    }
}

impl<T> Drawable for PointCloud<T>
where
    T: Clone + Copy,
    Point3f: From<T>,
{
    fn bounding_box(&self) -> Aabb {
        if self.is_empty() {
            return Aabb::from_point(Point3f::origin());
        }

        let mut aabb = Aabb::from_point(Point3f::from(self.points[0]));
        for point in &self.points {
            aabb.expand(&Point3f::from(*point));
        }
        aabb
    }
}

impl Drawable for SurfaceMesh {
    fn bounding_box(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::from_point(Point3f::origin());
        }

        let mut aabb = Aabb::from_point(self.vertices[0]);
        for vertex in &self.vertices {
            aabb.expand(vertex);
        }
        aabb
    }
}

impl Drawable for PointCloudGeometry {
    fn bounding_box(&self) -> Aabb {
        let mut chunks = self.positions().chunks_exact(3);
        let first = match chunks.next() {
            Some(chunk) => Point3f::new(chunk[0], chunk[1], chunk[2]),
            None => return Aabb::from_point(Point3f::origin()),
        };

        let mut aabb = Aabb::from_point(first);
        for chunk in chunks {
            aabb.expand(&Point3f::new(chunk[0], chunk[1], chunk[2]));
        }
        aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_bounding_box_covers_all_points() {
        let cloud = PointCloud::from_points(vec![
            DepthPoint3f::new(Point3f::new(0.0, 0.0, -10.0), [0.0; 3], 1.0),
            DepthPoint3f::new(Point3f::new(-2.0, 3.0, -20.0), [0.0; 3], 1.0),
            DepthPoint3f::new(Point3f::new(1.0, -1.0, -15.0), [0.0; 3], 1.0),
        ]);

        let aabb = cloud.bounding_box();
        assert_eq!(aabb.min, Point3f::new(-2.0, -1.0, -20.0));
        assert_eq!(aabb.max, Point3f::new(1.0, 3.0, -10.0));
        assert_eq!(cloud.center(), Point3f::new(-0.5, 1.0, -15.0));
    }
}
