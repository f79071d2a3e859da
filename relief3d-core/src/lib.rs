//! Core data structures and traits for relief3d
//!
//! This crate provides the fundamental types shared by the reconstruction
//! pipeline and the scene layer: points, pixel grids, image descriptors,
//! geometry containers, bounding volumes, transforms and errors.

pub mod bounds;
pub mod error;
pub mod grid;
pub mod image;
pub mod mesh;
pub mod point;
pub mod point_cloud;
pub mod traits;
pub mod transform;

pub use bounds::*;
pub use error::*;
pub use grid::*;
pub use image::*;
pub use mesh::*;
pub use point::*;
pub use point_cloud::*;
pub use traits::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
