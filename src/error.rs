use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Scene.
    #[error("failed to load scene from {path}: {message}")]
    SceneLoadFailed { path: PathBuf, message: String },
    // Mesh.
    #[error("array length mismatch: {0} != {1}")]
    MismatchedArrayLengths(usize, usize),
    #[error("uv index {index} is out of bounds for {len} uv positions")]
    IndexOutOfBounds { index: u32, len: usize },
    #[error("face {face} has no vertices")]
    InvalidFaceSize { face: usize },
    // Raster.
    #[error("invalid image size: {0}")]
    InvalidImageSize(u32),
    #[error("unable to allocate a {0}x{0} canvas")]
    CanvasCreationFailed(u32),
    #[error("failed to write image to {path}: {message}")]
    ImageWriteFailed { path: PathBuf, message: String },
    // Settings.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}
