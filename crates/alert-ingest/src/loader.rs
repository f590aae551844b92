//! Alert Document Loading

use crate::error::IngestError;
use alert_model::Alert;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Top-level document shape: one key wrapping the ordered alert list
#[derive(Debug, Deserialize)]
struct AlertDocument {
    alerts: Vec<Alert>,
}

/// Parse an alert document from raw JSON, preserving document order
pub fn parse_alerts(raw: &str) -> Result<Vec<Alert>, IngestError> {
    let document: AlertDocument = serde_json::from_str(raw)?;
    Ok(document.alerts)
}

/// Load alerts from a JSON document on disk
pub fn load_alerts(path: &Path) -> Result<Vec<Alert>, IngestError> {
    let raw = fs::read_to_string(path)?;
    let alerts = parse_alerts(&raw)?;
    info!(path = %path.display(), count = alerts.len(), "loaded alert document");
    Ok(alerts)
}
