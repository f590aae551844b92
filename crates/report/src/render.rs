//! Text Report Rendering

use alert_pipeline::ReportView;
use chrono::SecondsFormat;

/// Render the ordered view in the report's text layout
///
/// Deviations print with two decimals; timestamps print as RFC 3339.
pub fn render_text(view: &ReportView) -> String {
    let mut out = String::from("Grouped Alerts by Service (Ordered by Total Priority):\n");

    for service in &view.services {
        out.push_str(&format!("\nService: {}\n", service.service));
        for group in &service.groups {
            out.push_str(&format!(
                "  Component: {}, Total Priority: {}\n",
                group.component, group.priority
            ));
            for member in &group.alerts {
                let alert = &member.alert;
                out.push_str(&format!(
                    "    - ID: {} | Severity: {} | Time: {} | Metric: {} | Value: {} | Threshold: {} | Deviation: {:.2}% | Description: {}\n",
                    alert.id,
                    alert.severity,
                    alert.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                    alert.metric,
                    alert.value,
                    alert.threshold,
                    member.deviation_percent,
                    alert.description,
                ));
            }
        }
    }

    out
}
