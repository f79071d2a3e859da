//! Camera utilities

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Base vertical field of view in degrees, divided by the viewer scale
pub const BASE_FOV_DEGREES: f32 = 100.0;

/// World-space distance at which reconstructed models are framed
pub const FRAMING_DISTANCE: f32 = 50.0;

/// A perspective camera for viewing reconstructed models
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Apply the framing rule for a freshly installed model
    ///
    /// Field of view narrows as `scale` grows (`scale` is an inverse-fov
    /// multiplier), the aspect ratio follows the viewport, and the camera
    /// returns to the fixed framing position on the depth axis.
    pub fn frame(&mut self, scale: f32, viewport: (u32, u32)) {
        self.fov = (BASE_FOV_DEGREES / scale).to_radians();
        self.set_aspect(viewport);
        self.position = Point3::new(0.0, 0.0, FRAMING_DISTANCE);
        self.target = Point3::origin();
    }

    /// Track a viewport change without re-framing
    pub fn set_aspect(&mut self, viewport: (u32, u32)) {
        self.aspect_ratio = viewport.0 as f32 / viewport.1 as f32;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, FRAMING_DISTANCE),
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            BASE_FOV_DEGREES.to_radians(),
            1.0,
            1.0,
            1000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn framing_divides_the_base_fov() {
        let mut camera = Camera::default();
        camera.frame(2.0, (1920, 1080));

        assert_relative_eq!(camera.fov, 50.0f32.to_radians());
        assert_relative_eq!(camera.aspect_ratio, 1920.0 / 1080.0);
        assert_eq!(camera.position, Point3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn matrices_follow_the_pose() {
        let camera = Camera::default();

        // looking down -z from the framing distance, the view transform
        // brings the origin to -FRAMING_DISTANCE on the view z axis
        let view = camera.view_matrix();
        let origin = view.transform_point(&Point3::origin());
        assert_relative_eq!(origin.z, -FRAMING_DISTANCE, epsilon = 1e-5);

        let projection = camera.projection_matrix();
        assert!(projection[(0, 0)] > 0.0);
        assert!(projection[(1, 1)] > 0.0);
    }

    #[test]
    fn resize_only_touches_aspect() {
        let mut camera = Camera::default();
        camera.frame(1.0, (100, 100));
        camera.set_aspect((200, 100));

        assert_relative_eq!(camera.aspect_ratio, 2.0);
        assert_relative_eq!(camera.fov, 100.0f32.to_radians());
    }
}
