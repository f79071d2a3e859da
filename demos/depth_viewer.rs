//! Reconstruct a color/depth image pair and report the resulting model
//!
//! Loads the pair from disk, runs the full pipeline into a headless scene,
//! and prints the geometry, bounds and framing a renderer would receive.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use relief3d_core::Drawable;
use relief3d_io::load_image_pair;
use relief3d_reconstruction::{ReconstructedGeometry, RenderMode};
use relief3d_scene::{HeadlessScene, ViewerConfig, World};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    PointCloud,
    SurfaceMesh,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::PointCloud => RenderMode::PointCloud,
            Mode::SurfaceMesh => RenderMode::SurfaceMesh,
        }
    }
}

#[derive(Parser)]
#[command(about = "Reconstruct a 3D model from a color image and a depth map")]
struct Args {
    /// Color image path
    image: std::path::PathBuf,

    /// Depth image path (RGBA-packed 32-bit depth)
    depth: std::path::PathBuf,

    /// Inverse field-of-view multiplier
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Pointer-rotation gain
    #[arg(long, default_value_t = 1.0)]
    sensitivity: f32,

    /// Geometry assembly strategy
    #[arg(long, value_enum, default_value = "surface-mesh")]
    mode: Mode,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1280x720")]
    viewport: String,
}

fn parse_viewport(raw: &str) -> anyhow::Result<(u32, u32)> {
    let (width, height) = raw
        .split_once('x')
        .context("viewport must look like 1280x720")?;
    Ok((width.parse()?, height.parse()?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let viewport = parse_viewport(&args.viewport)?;

    let (image, depth) = load_image_pair(&args.image, &args.depth)?;
    println!(
        "loaded color image {}x{}, depth resampled to match",
        image.width(),
        image.height()
    );

    let config = ViewerConfig {
        scale: args.scale,
        sensitivity: args.sensitivity,
        mode: args.mode.into(),
    };
    let mut world = World::new(HeadlessScene::new(), config);
    world.create_world(&image, &depth, viewport)?;

    for (id, node) in world.scene().nodes() {
        match &node.geometry {
            ReconstructedGeometry::PointCloud(cloud) => {
                println!("node {id}: point cloud with {} points", cloud.len());
            }
            ReconstructedGeometry::Surface(mesh) => {
                println!(
                    "node {id}: surface mesh with {} vertices, {} faces",
                    mesh.vertex_count(),
                    mesh.face_count()
                );
            }
        }
        let bounds = node.geometry.bounding_box();
        println!(
            "  bounds: min {:?}, max {:?}, size {:?}",
            bounds.min,
            bounds.max,
            bounds.size()
        );
        println!(
            "  node translation: {:?}",
            node.transform.translation_part()
        );
    }

    let camera = world.camera();
    println!(
        "camera: position {:?}, fov {:.1} deg, aspect {:.3}",
        camera.position,
        camera.fov.to_degrees(),
        camera.aspect_ratio
    );

    Ok(())
}
