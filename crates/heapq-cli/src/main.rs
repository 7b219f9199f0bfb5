//! heapq CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use heapq_cli::cli::Cli;
use heapq_cli::commands;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = commands::execute(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
