//! Centralized output naming convention.
//!
//! This module is the single source of truth for derived output filenames:
//! a resize of `wall.png` to 200×100 lands next to the input as
//! `wall_200_100.png`. Other modules call [`output_path`] rather than
//! formatting names themselves, so the convention stays consistent between
//! the tiler and the CLI.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::grid::TargetSize;

/// Derive the output path for a resize of `input` to `target`.
///
/// The output sits in the same directory as the input and keeps its
/// extension, so the saved file stays in the input's format.
///
/// # Format
///
/// `{basename}_{width}_{height}{ext}`
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use tilefit::{output_path, TargetSize};
///
/// let target = TargetSize::new(200, 100).unwrap();
/// assert_eq!(
///     output_path(Path::new("textures/wall.png"), target),
///     PathBuf::from("textures/wall_200_100.png")
/// );
/// ```
pub fn output_path(input: &Path, target: TargetSize) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(format!("_{}_{}", target.width(), target.height()));
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(width: u32, height: u32) -> TargetSize {
        TargetSize::new(width, height).unwrap()
    }

    #[test]
    fn test_output_path_appends_dimensions_before_extension() {
        assert_eq!(
            output_path(Path::new("wall.png"), target(200, 100)),
            PathBuf::from("wall_200_100.png")
        );
    }

    #[test]
    fn test_output_path_keeps_parent_directory() {
        assert_eq!(
            output_path(Path::new("assets/textures/floor.jpeg"), target(512, 512)),
            PathBuf::from("assets/textures/floor_512_512.jpeg")
        );
    }

    #[test]
    fn test_output_path_without_extension_stays_bare() {
        assert_eq!(
            output_path(Path::new("texture"), target(64, 32)),
            PathBuf::from("texture_64_32")
        );
    }

    #[test]
    fn test_output_path_preserves_extension_case() {
        assert_eq!(
            output_path(Path::new("brick.PNG"), target(100, 100)),
            PathBuf::from("brick_100_100.PNG")
        );
    }

    #[test]
    fn test_output_path_keeps_dots_in_stem() {
        assert_eq!(
            output_path(Path::new("wall.v2.png"), target(10, 20)),
            PathBuf::from("wall.v2_10_20.png")
        );
    }
}
