//! PXLM - Command-line tool for validating .pxlm files and converting them to and from images

use std::process::ExitCode;

use pxlm::cli;

fn main() -> ExitCode {
    cli::run()
}
