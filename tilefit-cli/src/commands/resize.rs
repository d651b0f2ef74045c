//! Resize command - tile a texture to exact output dimensions.

use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::Confirm;

use tilefit::{
    AlwaysOverwrite, NeverOverwrite, OverwritePolicy, ResizeOutcome, TargetSize, TileGrid, Tiler,
};

use crate::error::CliError;

/// Arguments for the resize command.
#[derive(Debug, Args)]
pub struct ResizeArgs {
    /// Input image file
    pub input_file: PathBuf,

    /// New width in pixels
    pub new_width: u32,

    /// New height in pixels
    pub new_height: u32,

    /// Write to this path instead of the derived {name}_{width}_{height} file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing output file without asking
    #[arg(short = 'y', long, conflicts_with = "no_clobber")]
    pub yes: bool,

    /// Never replace an existing output file
    #[arg(long)]
    pub no_clobber: bool,
}

/// Run the resize command.
pub fn run(args: ResizeArgs) -> Result<(), CliError> {
    let target = TargetSize::new(args.new_width, args.new_height)?;

    // Header-only probe, so the repeat counts print before the compose pass.
    let (source_width, source_height) =
        image::image_dimensions(&args.input_file).map_err(|e| CliError::ReadInput {
            path: args.input_file.clone(),
            reason: e.to_string(),
        })?;
    let grid = TileGrid::compute(source_width, source_height, target)?;
    println!(
        "Repeating texture {} times horizontally and {} times vertically",
        grid.repeat_x, grid.repeat_y
    );

    let mut tiler = Tiler::new();
    if let Some(ref output) = args.output {
        tiler = tiler.with_output(output.clone());
    }
    tiler = if args.yes {
        tiler.with_overwrite_policy(AlwaysOverwrite)
    } else if args.no_clobber {
        tiler.with_overwrite_policy(NeverOverwrite)
    } else {
        tiler.with_overwrite_policy(ConfirmPrompt)
    };

    match tiler.resize(&args.input_file, target)? {
        ResizeOutcome::Written(path) => {
            println!("Success: Created {}", path.display());
        }
        ResizeOutcome::Cancelled => {
            println!("Operation cancelled");
        }
    }
    Ok(())
}

/// Interactive overwrite confirmation, defaulting to yes.
struct ConfirmPrompt;

impl OverwritePolicy for ConfirmPrompt {
    fn confirm(&self, path: &Path) -> bool {
        Confirm::new()
            .with_prompt(format!(
                "{} already exists. Do you want to replace it?",
                path.display()
            ))
            .default(true)
            .interact()
            // A failed prompt (e.g. no terminal) must not clobber the file.
            .unwrap_or(false)
    }
}
