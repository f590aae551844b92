//! Alert Aggregation

use alert_model::{severity_weight, Alert};
use std::collections::HashMap;
use tracing::debug;

/// Alerts sharing a (service, component) key, with their summed severity weight
#[derive(Debug, Clone, PartialEq)]
pub struct AlertGroup {
    pub service: String,
    pub component: String,
    /// Members in the order they were encountered
    pub alerts: Vec<Alert>,
    /// Sum of member severity weights
    pub priority: u32,
}

/// Cluster alerts by (service, component) in one ordered pass
///
/// Groups come back in first-creation order. The side index keeps key lookup
/// O(1) without tying iteration order to a hash map, so member order and group
/// order are reproducible across runs. Ranking across groups is a separate
/// stage.
pub fn group_alerts(alerts: &[Alert]) -> Vec<AlertGroup> {
    let mut groups: Vec<AlertGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for alert in alerts {
        let weight = severity_weight(&alert.severity);
        let key = (alert.service.clone(), alert.component.clone());

        match index.get(&key) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.alerts.push(alert.clone());
                group.priority += weight;
            }
            None => {
                index.insert(key, groups.len());
                groups.push(AlertGroup {
                    service: alert.service.clone(),
                    component: alert.component.clone(),
                    alerts: vec![alert.clone()],
                    priority: weight,
                });
            }
        }
    }

    debug!(alerts = alerts.len(), groups = groups.len(), "grouped alerts");
    groups
}
