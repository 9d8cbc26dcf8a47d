use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an image and running the
/// detection pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
