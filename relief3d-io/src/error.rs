//! Error types for input acquisition

use thiserror::Error;

/// Errors that can occur while acquiring input images
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid pixel buffer: {message}")]
    InvalidBuffer { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AcquisitionError> for relief3d_core::Error {
    fn from(error: AcquisitionError) -> Self {
        relief3d_core::Error::Acquisition(error.to_string())
    }
}
