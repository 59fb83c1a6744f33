//! Aggregate view models: the KPI set and distribution slices.

use serde::{Deserialize, Serialize};

use crate::taxonomy::Role;

/// Time-windowed KPI set over a filtered record snapshot.
///
/// `total_generated == total_active + total_closed` always holds;
/// `utilization_rate` is 0 for an empty window, otherwise in `[0, 100]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_generated: u64,
    pub total_active: u64,
    pub total_closed: u64,
    pub pending: u64,
    pub work_in_progress: u64,
    pub overdue: u64,
    pub implemented: u64,
    pub rejected: u64,
    pub auto_closed: u64,
    /// Overdue alerts older than three days at evaluation time.
    pub overdue_beyond_three_days: u64,
    /// `round(100 · closed / generated, 2)`, zero-guarded.
    pub utilization_rate: f64,
}

/// One slice of the role distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

/// One row of the overall status statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}
