//! Command-line interface implementation for folio.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for folio.
///
/// Every argument is optional: a bare `folio` builds the site in the current directory.
#[derive(Parser, Debug)]
#[command(author, version, about = "folio: pre-render a portfolio site into static HTML", long_about = None)]
pub struct Args {
    /// Site directory containing views/, public/ and an optional folio.{json,yml,yaml}
    #[arg(value_name = "SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,

    /// Output directory, overriding the configured one
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
