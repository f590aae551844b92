//! Command-Line Flags

use alert_pipeline::FilterCriteria;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Filter, group, and rank monitoring alerts from a JSON document
#[derive(Debug, Parser)]
#[command(name = "alert-report", version, about)]
pub struct Cli {
    /// Path to the JSON alert document
    #[arg(long, default_value = "sample_alerts.json")]
    pub file: PathBuf,

    /// Keep only alerts with this severity (critical, warning, info, ...)
    #[arg(long)]
    pub severity: Option<String>,

    /// Window start (RFC 3339); applied only together with --end
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// Window end (RFC 3339); applied only together with --start
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,

    /// Keep only alerts from the last N minutes
    #[arg(long)]
    pub last: Option<i64>,

    /// Keep only alerts from this service
    #[arg(long)]
    pub service: Option<String>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Translate the flag surface into pipeline filter criteria
    ///
    /// The absolute window needs both bounds; a lone bound is ignored.
    pub fn criteria(&self) -> FilterCriteria {
        let window = match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            (None, None) => None,
            _ => {
                warn!("--start and --end must both be set; ignoring the time window");
                None
            }
        };

        FilterCriteria {
            severity: self.severity.clone(),
            window,
            last_minutes: self.last,
            service: self.service.clone(),
        }
    }
}
