//! # Storefront CLI
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Resolve configuration & load the catalogue
//! 4. Render the requested view to stdout

use std::process::ExitCode;

use clap::Parser;
use storefront::cli::Cli;
use tracing::error;

fn main() -> ExitCode {
    storefront::init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match storefront::run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "storefront failed");
            ExitCode::FAILURE
        }
    }
}
