//! Alert Report - Main Entry Point

use clap::Parser;
use report::{init_logging, run, Cli};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!("=== alert-report v{} ===", env!("CARGO_PKG_VERSION"));

    run(&cli)
}
