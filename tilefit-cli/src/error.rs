//! CLI error types.

use std::fmt;
use std::path::PathBuf;

use tilefit::{GridError, TilerError};

/// Errors that can occur while running a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// Requested dimensions were rejected.
    InvalidDimensions(GridError),

    /// Input image could not be read or decoded.
    ReadInput { path: PathBuf, reason: String },

    /// The resize operation failed.
    Resize(TilerError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidDimensions(e) => {
                write!(f, "Invalid dimensions: {}", e)
            }
            CliError::ReadInput { path, reason } => {
                write!(f, "Cannot read {}: {}", path.display(), reason)
            }
            CliError::Resize(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidDimensions(e) => Some(e),
            CliError::ReadInput { .. } => None,
            CliError::Resize(e) => Some(e),
        }
    }
}

impl From<TilerError> for CliError {
    fn from(e: TilerError) -> Self {
        CliError::Resize(e)
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        CliError::InvalidDimensions(e)
    }
}
