//! 3D transformation utilities

use nalgebra::{Isometry3, Matrix4, Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points and geometry nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f32>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3<f32>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a rotation transformation from a quaternion
    pub fn rotation(rotation: UnitQuaternion<f32>) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Create a transformation from translation and rotation
    pub fn from_translation_rotation(
        translation: Vector3<f32>,
        rotation: UnitQuaternion<f32>,
    ) -> Self {
        let isometry = Isometry3::from_parts(translation.into(), rotation);
        Self {
            matrix: isometry.to_homogeneous(),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// The translation component of the transformation
    pub fn translation_part(&self) -> Vector3<f32> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f32>> for Transform3D {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translation_moves_points() {
        let transform = Transform3D::translation(Vector3::new(0.0, 0.0, 350.0));
        let moved = transform.transform_point(&Point3::new(1.0, 2.0, -300.0));
        assert_relative_eq!(moved.z, 50.0);
        assert_relative_eq!(moved.x, 1.0);
    }

    #[test]
    fn compose_applies_right_hand_side_first() {
        let shift = Transform3D::translation(Vector3::new(1.0, 0.0, 0.0));
        let quarter_turn =
            Transform3D::rotation(UnitQuaternion::from_euler_angles(0.0, 0.0, std::f32::consts::FRAC_PI_2));

        let composed = quarter_turn * shift;
        let moved = composed.transform_point(&Point3::origin());
        assert_relative_eq!(moved.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(moved.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn translation_then_rotation_composes() {
        let rotation = UnitQuaternion::from_euler_angles(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let transform =
            Transform3D::from_translation_rotation(Vector3::new(0.0, 0.0, 10.0), rotation);
        // rotation applies before the translation
        let moved = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(moved.z, 9.0, epsilon = 1e-6);
    }
}
