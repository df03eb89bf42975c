//! pkgset CLI - OS package-set resolution for image builds
//!
//! Entry point for the pkgset command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgset::cli::output::display_error;
use pkgset::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over -v and the settings file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level(&settings)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli.run(&settings) {
        display_error(&e);
        std::process::exit(1);
    }
}
