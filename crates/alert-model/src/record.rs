//! Alert Record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One monitoring alert as it appears in the input document
///
/// Records are never mutated after parsing; every downstream stage reads them
/// and produces new structures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Opaque unique identifier
    pub id: String,
    /// When the alert fired (RFC 3339 on the wire)
    pub timestamp: DateTime<Utc>,
    /// Owning service
    pub service: String,
    /// Component within the service
    pub component: String,
    /// Severity label (open set: critical, warning, info, others)
    pub severity: String,
    /// Name of the measured quantity
    pub metric: String,
    /// Observed reading
    pub value: i64,
    /// Configured limit for the metric
    pub threshold: i64,
    /// Free-text description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_from_document_fields() {
        let raw = r#"{
            "id": "a-1",
            "timestamp": "2026-08-06T10:15:00Z",
            "service": "api",
            "component": "db",
            "severity": "critical",
            "metric": "latency_ms",
            "value": 150,
            "threshold": 100,
            "description": "query latency above limit"
        }"#;

        let alert: Alert = serde_json::from_str(raw).unwrap();
        assert_eq!(alert.id, "a-1");
        assert_eq!(
            alert.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 6, 10, 15, 0).unwrap()
        );
        assert_eq!(alert.service, "api");
        assert_eq!(alert.component, "db");
        assert_eq!(alert.value, 150);
        assert_eq!(alert.threshold, 100);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        let raw = r#"{
            "id": "a-1",
            "timestamp": "yesterday",
            "service": "api",
            "component": "db",
            "severity": "info",
            "metric": "latency_ms",
            "value": 1,
            "threshold": 1,
            "description": ""
        }"#;

        assert!(serde_json::from_str::<Alert>(raw).is_err());
    }
}
