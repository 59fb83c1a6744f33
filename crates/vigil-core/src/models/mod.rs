//! Data models for the alert pipeline.

pub mod alert_draft;
pub mod alert_record;
pub mod cross_tab;
pub mod filter_spec;
pub mod kpi_set;

pub use alert_draft::{AlertDraft, AlertPatch};
pub use alert_record::{gap_between, AlertRecord};
pub use cross_tab::{CrossTab, CrossTabCell};
pub use filter_spec::{CategoryFilter, FilterSpec, MonthFilter, SystemFilter};
pub use kpi_set::{KpiSet, RoleCount, StatusCount};
