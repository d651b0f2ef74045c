//! Tiling transform and the file-level resize operation.
//!
//! [`tile_to_fit`] repeats a source image across a canvas large enough to
//! cover the target dimensions, then center-crops to the exact size. No
//! resampling takes place; every output pixel is a copy of a source pixel.
//!
//! [`Tiler`] wraps the transform with loading, output naming, overwrite
//! confirmation and saving:
//!
//! ```no_run
//! use std::path::Path;
//! use tilefit::{TargetSize, Tiler};
//!
//! let target = TargetSize::new(200, 100).unwrap();
//! let outcome = Tiler::new().resize(Path::new("wall.png"), target).unwrap();
//! println!("{:?}", outcome);
//! ```

mod error;
mod policy;

pub use error::{TilerError, TilerResult};
pub use policy::{AlwaysOverwrite, NeverOverwrite, OverwritePolicy};

use std::path::{Path, PathBuf};

use image::{imageops, DynamicImage, ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::grid::{GridError, TargetSize, TileGrid};
use crate::naming::output_path;

/// Result of a file-level resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Output written to the given path.
    Written(PathBuf),
    /// An existing output was kept; nothing was written.
    Cancelled,
}

/// Tile `source` across a canvas and center-crop to exactly `target`.
///
/// The source is pasted at every grid cell `(i * width, j * height)`, so the
/// canvas covers the target on both axes before the crop. The returned image
/// is always exactly `target` in size; when the target equals the source
/// size the result is pixel-identical to the source.
pub fn tile_to_fit(source: &DynamicImage, target: TargetSize) -> Result<RgbaImage, GridError> {
    let grid = TileGrid::compute(source.width(), source.height(), target)?;
    debug!(
        repeat_x = grid.repeat_x,
        repeat_y = grid.repeat_y,
        canvas_width = grid.canvas_width,
        canvas_height = grid.canvas_height,
        "composing tiled canvas"
    );

    let tile = source.to_rgba8();
    let mut canvas = RgbaImage::new(grid.canvas_width, grid.canvas_height);
    for j in 0..grid.repeat_y {
        for i in 0..grid.repeat_x {
            imageops::replace(
                &mut canvas,
                &tile,
                i64::from(i) * i64::from(source.width()),
                i64::from(j) * i64::from(source.height()),
            );
        }
    }

    let cropped = imageops::crop_imm(
        &canvas,
        grid.crop_left,
        grid.crop_top,
        target.width(),
        target.height(),
    );
    Ok(cropped.to_image())
}

/// File-level resize: load, tile, crop, save.
///
/// The output path is derived from the input name unless overridden with
/// [`with_output`](Tiler::with_output). When the output already exists the
/// configured [`OverwritePolicy`] decides whether it is replaced; declining
/// leaves the file untouched and yields [`ResizeOutcome::Cancelled`].
pub struct Tiler {
    output: Option<PathBuf>,
    policy: Box<dyn OverwritePolicy>,
}

impl Tiler {
    /// Create a tiler with derived output naming that replaces existing
    /// outputs without asking.
    pub fn new() -> Self {
        Self {
            output: None,
            policy: Box::new(AlwaysOverwrite),
        }
    }

    /// Write to `path` instead of the derived output name.
    pub fn with_output(mut self, path: PathBuf) -> Self {
        self.output = Some(path);
        self
    }

    /// Set the policy consulted before replacing an existing output.
    pub fn with_overwrite_policy(mut self, policy: impl OverwritePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Resize the image at `source_path` to exactly `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TilerError::SourceNotFound`] if the source cannot be read,
    /// [`TilerError::Decode`] if it is not a decodable image, and
    /// [`TilerError::Save`] if the output cannot be written.
    pub fn resize(&self, source_path: &Path, target: TargetSize) -> TilerResult<ResizeOutcome> {
        let reader = ImageReader::open(source_path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| TilerError::SourceNotFound {
                path: source_path.to_path_buf(),
                source: e,
            })?;
        let source = reader.decode().map_err(|e| TilerError::Decode {
            path: source_path.to_path_buf(),
            source: e,
        })?;
        debug!(
            width = source.width(),
            height = source.height(),
            "loaded source image"
        );

        let output = tile_to_fit(&source, target)?;

        let out_path = match &self.output {
            Some(path) => path.clone(),
            None => output_path(source_path, target),
        };

        if out_path.exists() && !self.policy.confirm(&out_path) {
            info!(path = %out_path.display(), "overwrite declined, keeping existing file");
            return Ok(ResizeOutcome::Cancelled);
        }

        output.save(&out_path).map_err(|e| TilerError::Save {
            path: out_path.clone(),
            source: e,
        })?;
        info!(path = %out_path.display(), "output written");
        Ok(ResizeOutcome::Written(out_path))
    }
}

impl Default for Tiler {
    fn default() -> Self {
        Self::new()
    }
}
