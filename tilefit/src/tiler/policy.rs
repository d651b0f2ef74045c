//! Overwrite confirmation seam.
//!
//! Saving consults an [`OverwritePolicy`] when the output path already
//! exists. The CLI installs an interactive prompt here; tests and
//! non-interactive runs use [`AlwaysOverwrite`] or [`NeverOverwrite`].

use std::path::Path;

/// Decides whether an existing output file may be replaced.
pub trait OverwritePolicy {
    /// Return `true` to replace `path`, `false` to cancel the write.
    fn confirm(&self, path: &Path) -> bool;
}

/// Replace existing outputs without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl OverwritePolicy for AlwaysOverwrite {
    fn confirm(&self, _path: &Path) -> bool {
        true
    }
}

/// Keep existing outputs, cancelling the write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverOverwrite;

impl OverwritePolicy for NeverOverwrite {
    fn confirm(&self, _path: &Path) -> bool {
        false
    }
}
