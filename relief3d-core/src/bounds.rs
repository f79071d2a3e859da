//! Axis-aligned bounding volumes

use crate::point::{Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box accumulated over a stream of points
///
/// Seeded from the first point and expanded per-axis as further points are
/// produced, so a full pass over the data builds the box incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Create a degenerate box containing a single point
    pub fn from_point(point: Point3f) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to contain `point`
    pub fn expand(&mut self, point: &Point3f) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    pub fn contains(&self, point: &Point3f) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.z >= self.min.z
            && point.x <= self.max.x
            && point.y <= self.max.y
            && point.z <= self.max.z
    }

    pub fn center(&self) -> Point3f {
        Point3f::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_grows_per_axis() {
        let mut aabb = Aabb::from_point(Point3f::new(1.0, 2.0, 3.0));
        aabb.expand(&Point3f::new(-1.0, 5.0, 3.0));
        aabb.expand(&Point3f::new(0.0, 0.0, -7.0));

        assert_eq!(aabb.min, Point3f::new(-1.0, 0.0, -7.0));
        assert_eq!(aabb.max, Point3f::new(1.0, 5.0, 3.0));
        assert!(aabb.contains(&Point3f::new(0.0, 1.0, 0.0)));
        assert!(!aabb.contains(&Point3f::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn center_is_midpoint() {
        let mut aabb = Aabb::from_point(Point3f::new(0.0, 0.0, -100.0));
        aabb.expand(&Point3f::new(2.0, 4.0, -300.0));
        assert_eq!(aabb.center(), Point3f::new(1.0, 2.0, -200.0));
    }
}
