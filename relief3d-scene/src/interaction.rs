//! Pointer-driven interaction helpers

use std::f32::consts::PI;

/// Rotation gain applied to normalized pointer offsets
const ROTATION_GAIN: f32 = 0.1;

/// Euler rotation `(x, y)` in radians for a pointer position
///
/// The pointer is normalized to `[-0.5, 0.5]` around the viewport center;
/// vertical movement tilts the model and horizontal movement turns it, the
/// signs chosen so the model leans toward the pointer.
pub fn pointer_rotation(sensitivity: f32, x: f32, y: f32, viewport: (u32, u32)) -> (f32, f32) {
    let nx = x / viewport.0 as f32 - 0.5;
    let ny = -(y / viewport.1 as f32 - 0.5);

    (
        ROTATION_GAIN * sensitivity * ny * PI,
        -ROTATION_GAIN * sensitivity * nx * PI,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_pointer_is_neutral() {
        let (rx, ry) = pointer_rotation(1.0, 400.0, 300.0, (800, 600));
        assert_relative_eq!(rx, 0.0);
        assert_relative_eq!(ry, 0.0);
    }

    #[test]
    fn corners_reach_the_gain_extremes() {
        // top-left corner: tilt up, turn right
        let (rx, ry) = pointer_rotation(1.0, 0.0, 0.0, (800, 600));
        assert_relative_eq!(rx, 0.05 * PI);
        assert_relative_eq!(ry, 0.05 * PI);

        // bottom-right corner mirrors both signs
        let (rx, ry) = pointer_rotation(1.0, 800.0, 600.0, (800, 600));
        assert_relative_eq!(rx, -0.05 * PI);
        assert_relative_eq!(ry, -0.05 * PI);
    }

    #[test]
    fn sensitivity_scales_linearly() {
        let (rx_1, ry_1) = pointer_rotation(1.0, 0.0, 0.0, (100, 100));
        let (rx_3, ry_3) = pointer_rotation(3.0, 0.0, 0.0, (100, 100));
        assert_relative_eq!(rx_3, 3.0 * rx_1);
        assert_relative_eq!(ry_3, 3.0 * ry_1);
    }
}
