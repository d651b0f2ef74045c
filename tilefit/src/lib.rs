//! Tilefit - exact-size texture tiling
//!
//! This library produces an image of exact target dimensions by repeating a
//! source texture in a grid and center-cropping the tiled canvas. There is
//! no resampling; every output pixel is copied from the source, which keeps
//! seamless game textures crisp at any requested size.
//!
//! The transform is a single pass: compute repeat counts by ceiling
//! division, paste the source at every grid cell, crop the centered window.
//!
//! ```
//! use image::DynamicImage;
//! use tilefit::{tile_to_fit, TargetSize};
//!
//! let source = DynamicImage::new_rgba8(64, 64);
//! let target = TargetSize::new(200, 100).unwrap();
//! let output = tile_to_fit(&source, target).unwrap();
//! assert_eq!(output.dimensions(), (200, 100));
//! ```

pub mod grid;
pub mod naming;
pub mod tiler;

pub use grid::{GridError, TargetSize, TileGrid};
pub use naming::output_path;
pub use tiler::{
    tile_to_fit, AlwaysOverwrite, NeverOverwrite, OverwritePolicy, ResizeOutcome, Tiler,
    TilerError, TilerResult,
};

/// Crate version reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
