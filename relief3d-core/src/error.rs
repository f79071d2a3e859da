//! Error types for relief3d

use thiserror::Error;

/// Main error type for relief3d operations
#[derive(Error, Debug)]
pub enum Error {
    /// An input image or depth source could not be obtained or decoded.
    /// The orchestrator keeps the previously built model when this occurs.
    #[error("acquisition failed: {0}")]
    Acquisition(String),

    /// A contract violation between paired buffers. Fatal to the current
    /// reconstruction attempt; never retried.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A surface mesh was requested on a grid too small to triangulate.
    /// Callers may fall back to point-cloud mode.
    #[error("degenerate grid: {width}x{height} produces no triangles")]
    DegenerateGrid { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for relief3d operations
pub type Result<T> = std::result::Result<T, Error>;
