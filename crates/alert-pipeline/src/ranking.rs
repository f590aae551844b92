//! Group Ranking and Report View

use crate::grouping::AlertGroup;
use alert_model::{deviation_percent, Alert};
use serde::Serialize;
use std::collections::HashMap;

/// One alert in the rendered view, with its threshold deviation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: Alert,
    pub deviation_percent: f64,
}

/// One (service, component) group in rendering order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    pub component: String,
    pub priority: u32,
    pub alerts: Vec<AlertView>,
}

/// All groups of one service, highest-ranked group first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub service: String,
    pub groups: Vec<GroupView>,
}

/// The fully ordered report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub services: Vec<ServiceView>,
}

/// Order groups for rendering
///
/// Priority descending, ties broken by service then component name so repeated
/// runs give identical output. Services appear in the order of their
/// highest-ranked group; within a service, groups keep the sorted order.
/// Member alerts keep aggregation order and gain their deviation percentage.
pub fn rank_groups(mut groups: Vec<AlertGroup>) -> ReportView {
    groups.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.service.cmp(&b.service))
            .then_with(|| a.component.cmp(&b.component))
    });

    let mut services: Vec<ServiceView> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for group in groups {
        let AlertGroup {
            service,
            component,
            alerts,
            priority,
        } = group;

        let alerts = alerts
            .into_iter()
            .map(|alert| AlertView {
                deviation_percent: deviation_percent(alert.value, alert.threshold),
                alert,
            })
            .collect();
        let view = GroupView {
            component,
            priority,
            alerts,
        };

        match index.get(&service) {
            Some(&slot) => services[slot].groups.push(view),
            None => {
                index.insert(service.clone(), services.len());
                services.push(ServiceView {
                    service,
                    groups: vec![view],
                });
            }
        }
    }

    ReportView { services }
}
