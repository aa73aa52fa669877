//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod convert;
mod validate;

use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, PxlmConfig};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixel Matrix Language (PXLM) file operations
#[derive(Parser)]
#[command(name = "pxlm")]
#[command(about = "Pixel Matrix Language (PXLM) file operations")]
#[command(version)]
#[command(allow_external_subcommands = true)]
pub struct Cli {
    /// Path to a pxlm.toml config file (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v for info, -vv for debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and correct a .pxlm file
    #[command(name = "validate")]
    Validate {
        /// Path to the .pxlm file to validate
        filepath: PathBuf,
    },

    /// Convert an image (PNG, JPEG, etc.) to .pxlm format
    #[command(name = "image_to_pxlm")]
    ImageToPxlm {
        /// Path to the image file
        image_path: PathBuf,

        /// Path to save the output .pxlm file
        output_pxlm: PathBuf,
    },

    /// Convert a .pxlm file to an image (PNG, JPEG, etc.)
    #[command(name = "pxlm_to_image")]
    PxlmToImage {
        /// Path to the .pxlm file
        pxlm_path: PathBuf,

        /// Path to save the output image file (format from extension)
        output_image: PathBuf,
    },

    #[command(external_subcommand)]
    Unknown(Vec<OsString>),
}

/// Run the CLI application
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run the CLI with explicit arguments (the first is the program name).
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_INVALID_ARGS)
            } else {
                ExitCode::from(EXIT_SUCCESS)
            };
        }
    };

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(Commands::Unknown(args)) => {
            log::debug!("unrecognized command {:?}", args.first());
            return print_usage_hint();
        }
        Some(command) => command,
        None => return print_usage_hint(),
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    dispatch(command, &config)
}

fn dispatch(command: Commands, config: &PxlmConfig) -> ExitCode {
    match command {
        Commands::Validate { filepath } => validate::run_validate(&filepath, config),
        Commands::ImageToPxlm { image_path, output_pxlm } => {
            convert::run_image_to_pxlm(&image_path, &output_pxlm, config)
        }
        Commands::PxlmToImage { pxlm_path, output_image } => {
            convert::run_pxlm_to_image(&pxlm_path, &output_image, config)
        }
        Commands::Unknown(_) => print_usage_hint(),
    }
}

fn print_usage_hint() -> ExitCode {
    println!("Invalid command. Use -h for help.");
    ExitCode::from(EXIT_SUCCESS)
}

/// Initialise env_logger once; later calls are ignored.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
