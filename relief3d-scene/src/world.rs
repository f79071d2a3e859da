//! Reconstruction orchestration and model lifecycle

use crate::camera::{Camera, FRAMING_DISTANCE};
use crate::graph::{NodeId, SceneGraph};
use crate::interaction::pointer_rotation;
use nalgebra::UnitQuaternion;
use relief3d_core::{Result, RgbaBuffer, Transform3D, Vector3};
use relief3d_reconstruction::{
    reconstruct, Reconstruction, ReconstructionConfig, ReconstructionParams, RenderMode,
};
use tracing::{debug, warn};

/// Lifecycle of the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldState {
    Idle,
    Loading,
    Built,
    Error,
}

/// Viewer-facing configuration
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    /// Inverse field-of-view multiplier; larger values zoom in. Must be
    /// positive.
    pub scale: f32,
    /// Pointer-rotation gain
    pub sensitivity: f32,
    /// Geometry assembly strategy for subsequent reconstructions
    pub mode: RenderMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            sensitivity: 1.0,
            mode: RenderMode::default(),
        }
    }
}

/// Handle to the single live model
#[derive(Debug, Clone, Copy)]
struct ModelHandle {
    node: NodeId,
    /// Midpoint of the model's projected depth range, in model space
    z_center: f32,
}

/// The reconstruction orchestrator
///
/// Owns the scene, the camera and at most one live model. Reconstruction
/// results are swapped in detach-old-then-attach-new, so an observer of the
/// scene always sees either the complete previous model or the complete new
/// one. A failed attempt leaves the previous model untouched.
pub struct World<S: SceneGraph> {
    scene: S,
    camera: Camera,
    config: ViewerConfig,
    params: ReconstructionParams,
    state: WorldState,
    generation: u64,
    model: Option<ModelHandle>,
}

impl<S: SceneGraph> World<S> {
    pub fn new(scene: S, config: ViewerConfig) -> Self {
        Self::with_params(scene, config, ReconstructionParams::default())
    }

    pub fn with_params(scene: S, config: ViewerConfig, params: ReconstructionParams) -> Self {
        Self {
            scene,
            camera: Camera::default(),
            config,
            params,
            state: WorldState::Idle,
            generation: 0,
            model: None,
        }
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Change the render mode for subsequent reconstructions
    pub fn set_mode(&mut self, mode: RenderMode) {
        self.config.mode = mode;
    }

    /// Start a reconstruction attempt and get its generation token
    ///
    /// Tokens are monotonically increasing; `install` rejects any token
    /// other than the latest, so a late result from a superseded attempt is
    /// discarded instead of overwriting a newer model.
    pub fn begin_reconstruction(&mut self) -> u64 {
        self.generation += 1;
        self.state = WorldState::Loading;
        debug!(generation = self.generation, "reconstruction started");
        self.generation
    }

    /// Install a finished reconstruction if its token is still current
    ///
    /// Returns `Ok(false)` when the token is stale and the result was
    /// dropped. On success the previous model (if any) is detached first,
    /// the new model node is positioned so its depth midpoint lands at the
    /// framing distance, and the camera is re-framed.
    pub fn install(
        &mut self,
        generation: u64,
        reconstruction: Reconstruction,
        viewport: (u32, u32),
    ) -> Result<bool> {
        if generation != self.generation {
            warn!(
                generation,
                current = self.generation,
                "discarding stale reconstruction"
            );
            return Ok(false);
        }

        if let Some(previous) = self.model.take() {
            self.scene.detach(previous.node);
        }

        let bounds = reconstruction.bounds;
        let z_center = (bounds.min.z + bounds.max.z) / 2.0;
        let node = self.scene.attach(reconstruction.geometry);
        self.scene.set_transform(
            node,
            Transform3D::translation(Vector3::new(0.0, 0.0, FRAMING_DISTANCE - z_center)),
        );

        self.camera.frame(self.config.scale, viewport);
        self.model = Some(ModelHandle { node, z_center });
        self.state = WorldState::Built;
        debug!(generation, z_center = f64::from(z_center), "model installed");
        Ok(true)
    }

    /// Reconstruct an image/depth pair and swap the result into the scene
    ///
    /// Re-invoking with identical inputs yields a structurally identical
    /// model and the same framing. On failure the world enters the Error
    /// state, the error is surfaced, and the previously displayed model
    /// stays attached.
    pub fn create_world(
        &mut self,
        image: &RgbaBuffer,
        depth: &RgbaBuffer,
        viewport: (u32, u32),
    ) -> Result<()> {
        let generation = self.begin_reconstruction();
        let config = ReconstructionConfig {
            mode: self.config.mode,
            params: self.params,
        };

        match reconstruct(image, depth, &config) {
            Ok(reconstruction) => {
                self.install(generation, reconstruction, viewport)?;
                Ok(())
            }
            Err(error) => {
                warn!(generation, %error, "reconstruction failed");
                self.state = WorldState::Error;
                Err(error)
            }
        }
    }

    /// Apply pointer-driven rotation to the live model
    ///
    /// The rotation composes with the framing translation so the model
    /// keeps its distance while turning. No-op until a model is built.
    pub fn pointer_moved(&mut self, x: f32, y: f32, viewport: (u32, u32)) {
        let Some(model) = self.model else {
            return;
        };

        let (rx, ry) = pointer_rotation(self.config.sensitivity, x, y, viewport);
        let rotation = UnitQuaternion::from_euler_angles(rx, ry, 0.0);
        let translation = Vector3::new(0.0, 0.0, FRAMING_DISTANCE - model.z_center);
        self.scene.set_transform(
            model.node,
            Transform3D::from_translation_rotation(translation, rotation),
        );
    }

    /// Track a viewport change
    pub fn resize(&mut self, viewport: (u32, u32)) {
        self.camera.set_aspect(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::HeadlessScene;
    use approx::assert_relative_eq;
    use relief3d_core::Drawable;

    const VIEWPORT: (u32, u32) = (640, 480);

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaBuffer {
        RgbaBuffer::new(
            width,
            height,
            rgba.repeat(width as usize * height as usize),
        )
        .unwrap()
    }

    fn world() -> World<HeadlessScene> {
        World::new(HeadlessScene::new(), ViewerConfig::default())
    }

    #[test]
    fn successful_reconstruction_builds_one_model() {
        let mut world = world();
        let image = solid_image(4, 4, [255, 255, 255, 255]);
        let depth = solid_image(4, 4, [0, 0, 0, 128]);

        assert_eq!(world.state(), WorldState::Idle);
        world.create_world(&image, &depth, VIEWPORT).unwrap();

        assert_eq!(world.state(), WorldState::Built);
        assert!(world.has_model());
        assert_eq!(world.scene().node_count(), 1);
        assert_eq!(world.camera().position.z, FRAMING_DISTANCE);
    }

    #[test]
    fn model_midpoint_lands_at_the_framing_distance() {
        let mut world = world();
        let image = solid_image(3, 3, [200, 100, 50, 255]);
        let depth = solid_image(3, 3, [0, 0, 0, 128]);

        world.create_world(&image, &depth, VIEWPORT).unwrap();

        let (_, node) = world.scene().nodes().next().unwrap();
        let bounds = node.geometry.bounding_box();
        let world_midpoint = node
            .transform
            .transform_point(&bounds.center());
        assert_relative_eq!(world_midpoint.z, FRAMING_DISTANCE, epsilon = 1e-3);
    }

    #[test]
    fn switching_modes_replaces_the_model() {
        let mut world = world();
        let image = solid_image(4, 4, [255, 255, 255, 255]);
        let depth = solid_image(4, 4, [0, 0, 0, 64]);

        world.create_world(&image, &depth, VIEWPORT).unwrap();
        world.set_mode(RenderMode::PointCloud);
        world.create_world(&image, &depth, VIEWPORT).unwrap();

        assert_eq!(world.scene().node_count(), 1);
        let (_, node) = world.scene().nodes().next().unwrap();
        assert!(matches!(
            node.geometry,
            relief3d_reconstruction::ReconstructedGeometry::PointCloud(_)
        ));
    }

    #[test]
    fn create_world_is_idempotent() {
        let mut world = world();
        let image = solid_image(4, 4, [12, 34, 56, 255]);
        let depth = solid_image(4, 4, [0, 0, 128, 0]);

        world.create_world(&image, &depth, VIEWPORT).unwrap();
        let first: Vec<_> = world
            .scene()
            .nodes()
            .map(|(_, node)| (node.geometry.vertex_count(), node.transform.matrix))
            .collect();

        world.create_world(&image, &depth, VIEWPORT).unwrap();
        let second: Vec<_> = world
            .scene()
            .nodes()
            .map(|(_, node)| (node.geometry.vertex_count(), node.transform.matrix))
            .collect();

        assert_eq!(first, second);
        assert_eq!(world.scene().node_count(), 1);
    }

    #[test]
    fn failure_retains_the_previous_model() {
        let mut world = world();
        let image = solid_image(4, 4, [255, 255, 255, 255]);
        let depth = solid_image(4, 4, [0, 0, 0, 200]);
        world.create_world(&image, &depth, VIEWPORT).unwrap();

        // degenerate 1xN grid fails the surface-mesh path
        let thin_image = solid_image(1, 4, [255, 255, 255, 255]);
        let thin_depth = solid_image(1, 4, [0, 0, 0, 200]);
        let error = world
            .create_world(&thin_image, &thin_depth, VIEWPORT)
            .unwrap_err();

        assert!(matches!(
            error,
            relief3d_core::Error::DegenerateGrid { .. }
        ));
        assert_eq!(world.state(), WorldState::Error);
        assert_eq!(world.scene().node_count(), 1);
        assert!(world.has_model());

        // the slate is clean again after the next success
        world.create_world(&image, &depth, VIEWPORT).unwrap();
        assert_eq!(world.state(), WorldState::Built);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut world = world();
        let image = solid_image(2, 2, [255, 255, 255, 255]);
        let depth = solid_image(2, 2, [0, 0, 0, 128]);
        let config = ReconstructionConfig::default();

        let stale_token = world.begin_reconstruction();
        let stale_result = reconstruct(&image, &depth, &config).unwrap();

        // a newer attempt supersedes the first before it lands
        world.create_world(&image, &depth, VIEWPORT).unwrap();

        let installed = world.install(stale_token, stale_result, VIEWPORT).unwrap();
        assert!(!installed);
        assert_eq!(world.scene().node_count(), 1);
        assert_eq!(world.state(), WorldState::Built);
    }

    #[test]
    fn pointer_motion_requires_a_model() {
        let mut world = world();
        // nothing attached yet, must not panic
        world.pointer_moved(10.0, 10.0, VIEWPORT);

        let image = solid_image(2, 2, [255, 255, 255, 255]);
        let depth = solid_image(2, 2, [0, 0, 0, 128]);
        world.create_world(&image, &depth, VIEWPORT).unwrap();

        let before = world.scene().nodes().next().unwrap().1.transform;
        world.pointer_moved(0.0, 0.0, VIEWPORT);
        let after = world.scene().nodes().next().unwrap().1.transform;

        assert_ne!(before.matrix, after.matrix);
        // translation survives the rotation
        assert_relative_eq!(
            after.translation_part().z,
            before.translation_part().z,
            epsilon = 1e-5
        );
    }

    #[test]
    fn resize_updates_the_camera_aspect() {
        let mut world = world();
        world.resize((200, 100));
        assert_relative_eq!(world.camera().aspect_ratio, 2.0);
    }
}
