//! Scene orchestration for relief3d
//!
//! Owns the model lifecycle around the pure reconstruction pipeline: an
//! abstract scene-graph capability, a camera with the framing rule, the
//! world state machine with its stale-result protection, and the
//! pointer-rotation interaction helpers.

pub mod camera;
pub mod graph;
pub mod interaction;
pub mod world;

pub use camera::*;
pub use graph::*;
pub use interaction::*;
pub use world::*;
