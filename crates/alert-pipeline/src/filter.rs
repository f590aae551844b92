//! Alert Filtering

use alert_model::Alert;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Optional selection criteria combined with logical AND
///
/// Unset criteria impose no constraint; with everything unset the filter is
/// the identity.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Exact severity label match
    pub severity: Option<String>,
    /// Inclusive absolute time window; only applies when both bounds are set
    pub window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// Keep alerts no older than this many minutes before `now`; values <= 0
    /// disable the check
    pub last_minutes: Option<i64>,
    /// Exact service name match
    pub service: Option<String>,
}

impl FilterCriteria {
    /// Select the alerts satisfying every set criterion, preserving input order
    ///
    /// The recency cutoff is computed once from `now`, not per alert, so a
    /// single invocation applies one consistent cutoff.
    pub fn apply(&self, alerts: &[Alert], now: DateTime<Utc>) -> Vec<Alert> {
        let cutoff = self
            .last_minutes
            .filter(|&minutes| minutes > 0)
            .map(|minutes| now - Duration::minutes(minutes));

        let filtered: Vec<Alert> = alerts
            .iter()
            .filter(|alert| self.matches(alert, cutoff))
            .cloned()
            .collect();

        debug!(total = alerts.len(), kept = filtered.len(), "filtered alerts");
        filtered
    }

    fn matches(&self, alert: &Alert, cutoff: Option<DateTime<Utc>>) -> bool {
        if let Some(severity) = self.severity.as_deref() {
            if !severity.is_empty() && alert.severity != severity {
                return false;
            }
        }
        if let Some((start, end)) = self.window {
            if alert.timestamp < start || alert.timestamp > end {
                return false;
            }
        }
        if let Some(cutoff) = cutoff {
            if alert.timestamp < cutoff {
                return false;
            }
        }
        if let Some(service) = self.service.as_deref() {
            if !service.is_empty() && alert.service != service {
                return false;
            }
        }
        true
    }
}
