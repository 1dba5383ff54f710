//! CLI entry point for the jigsaw puzzle engine

use clap::Parser;
use jigsolitaire::io::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> jigsolitaire::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_unset| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
