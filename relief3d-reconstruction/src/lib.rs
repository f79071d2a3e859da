//! # relief3d Reconstruction
//!
//! The depth-to-geometry pipeline: decode a packed RGBA depth image into
//! per-pixel depth codes, project every pixel into camera space through a
//! fixed pinhole placeholder, and assemble the result as either a colored
//! point cloud or a UV-mapped triangulated grid surface.
//!
//! The whole pipeline is synchronous and free of I/O; acquisition lives in
//! `relief3d-io` and scene management in `relief3d-scene`.

pub mod depth;
pub mod params;
pub mod pipeline;
pub mod point_cloud;
pub mod projector;
pub mod surface;

pub use depth::*;
pub use params::*;
pub use pipeline::*;
pub use point_cloud::*;
pub use projector::*;
pub use surface::*;
