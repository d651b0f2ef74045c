//! Tilefit CLI - resize textures by tiling and center-cropping.
//!
//! This binary wraps the `tilefit` library with argument parsing, logging
//! initialization and the interactive overwrite prompt.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::resize::ResizeArgs;

#[derive(Debug, Parser)]
#[command(
    name = "tilefit",
    version = tilefit::VERSION,
    about = "Resize textures by tiling and center-cropping, without resampling"
)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Tile an image to cover the target size, then center-crop to it
    Resize(ResizeArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resize(args) => commands::resize::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing output on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `-v` flags raise the level.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resize_args_parse_positionally() {
        let cli = Cli::try_parse_from(["tilefit", "resize", "wall.png", "200", "100"]).unwrap();
        let Commands::Resize(args) = cli.command;
        assert_eq!(args.input_file.to_str(), Some("wall.png"));
        assert_eq!(args.new_width, 200);
        assert_eq!(args.new_height, 100);
        assert!(!args.yes);
        assert!(!args.no_clobber);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_negative_dimensions_are_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["tilefit", "resize", "wall.png", "-200", "100"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_yes_conflicts_with_no_clobber() {
        let result = Cli::try_parse_from([
            "tilefit",
            "resize",
            "wall.png",
            "200",
            "100",
            "--yes",
            "--no-clobber",
        ]);
        assert!(result.is_err());
    }
}
