//! Alert Pipeline
//!
//! Filter -> group -> rank stages over a batch of alerts. Every stage is pure
//! and total: it reads immutable input and produces a new structure, so the
//! stages compose without shared state.

mod filter;
mod grouping;
mod ranking;

pub use filter::FilterCriteria;
pub use grouping::{group_alerts, AlertGroup};
pub use ranking::{rank_groups, AlertView, GroupView, ReportView, ServiceView};
