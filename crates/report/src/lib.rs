//! Alert Report Tool
//!
//! Wires the command-line flags to the filter -> group -> rank pipeline and
//! renders the ordered report as text or JSON.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod render;

pub use cli::Cli;
pub use render::render_text;

use alert_pipeline::{group_alerts, rank_groups};

/// Initialize logging
///
/// Log events go to stderr so the rendered report stays alone on stdout.
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the full report for parsed flags
pub fn run(cli: &Cli) -> Result<()> {
    let alerts = alert_ingest::load_alerts(&cli.file)
        .with_context(|| format!("loading alerts from {}", cli.file.display()))?;

    let filtered = cli.criteria().apply(&alerts, Utc::now());
    info!(total = alerts.len(), kept = filtered.len(), "applied filters");

    let view = rank_groups(group_alerts(&filtered));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    Ok(())
}
