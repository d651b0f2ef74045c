//! Error types for tiling operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::grid::GridError;

/// Result type for tiler operations.
pub type TilerResult<T> = Result<T, TilerError>;

/// Errors that can occur while tiling an image to size.
#[derive(Debug, Error)]
pub enum TilerError {
    /// Source file is missing or unreadable.
    #[error("cannot read source image {path}: {source}")]
    SourceNotFound { path: PathBuf, source: io::Error },

    /// Source file was read but is not a decodable image.
    #[error("cannot decode source image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Target or source dimensions are unusable.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(#[from] GridError),

    /// Writing the output file failed.
    #[error("cannot save output image {path}: {source}")]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}
