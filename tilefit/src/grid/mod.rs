//! Tile grid arithmetic
//!
//! Computes how often a source texture must repeat to cover a target size,
//! and where the centered crop window sits on the resulting canvas. All of
//! this is integer arithmetic; no pixels are touched here.

mod types;

pub use types::{GridError, TargetSize};

/// Tiling layout derived from a source size and a target size.
///
/// The canvas is the smallest whole-tile grid covering the target on both
/// axes; the crop window is centered on it, with any odd remainder going to
/// the right/bottom edge (integer floor division).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    /// Number of source repetitions along the horizontal axis.
    pub repeat_x: u32,
    /// Number of source repetitions along the vertical axis.
    pub repeat_y: u32,
    /// Canvas width before cropping (`repeat_x * source_width`).
    pub canvas_width: u32,
    /// Canvas height before cropping (`repeat_y * source_height`).
    pub canvas_height: u32,
    /// Left edge of the centered crop window.
    pub crop_left: u32,
    /// Top edge of the centered crop window.
    pub crop_top: u32,
}

impl TileGrid {
    /// Compute the tiling layout for a source image and a target size.
    ///
    /// # Arguments
    ///
    /// * `source_width` - Source image width in pixels (must be positive)
    /// * `source_height` - Source image height in pixels (must be positive)
    /// * `target` - Validated output dimensions
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptySource`] if the source has no pixels on
    /// either axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilefit::{TargetSize, TileGrid};
    ///
    /// let target = TargetSize::new(200, 100).unwrap();
    /// let grid = TileGrid::compute(64, 64, target).unwrap();
    /// assert_eq!((grid.repeat_x, grid.repeat_y), (4, 2));
    /// assert_eq!((grid.canvas_width, grid.canvas_height), (256, 128));
    /// assert_eq!((grid.crop_left, grid.crop_top), (28, 14));
    /// ```
    pub fn compute(
        source_width: u32,
        source_height: u32,
        target: TargetSize,
    ) -> Result<Self, GridError> {
        if source_width == 0 || source_height == 0 {
            return Err(GridError::EmptySource(source_width, source_height));
        }

        let repeat_x = target.width().div_ceil(source_width);
        let repeat_y = target.height().div_ceil(source_height);
        let canvas_width = repeat_x * source_width;
        let canvas_height = repeat_y * source_height;

        Ok(Self {
            repeat_x,
            repeat_y,
            canvas_width,
            canvas_height,
            crop_left: (canvas_width - target.width()) / 2,
            crop_top: (canvas_height - target.height()) / 2,
        })
    }
}
