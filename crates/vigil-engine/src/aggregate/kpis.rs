//! KPI aggregation over a filtered snapshot.

use chrono::NaiveDateTime;
use vigil_core::config::defaults::DEFAULT_OVERDUE_ESCALATION_DAYS;
use vigil_core::models::{AlertRecord, KpiSet};
use vigil_core::taxonomy::status::{
    AUTO_CLOSED, IMPLEMENTED, OVERDUE, PENDING, REJECTED, WORK_IN_PROGRESS,
};

/// Compute the KPI set for a (usually pre-filtered) record set.
///
/// `as_of` anchors the overdue-escalation age check; per-label counts go
/// through the fine-grained classifier, the active/closed split through
/// the coarse one.
pub fn compute_kpis(records: &[AlertRecord], as_of: NaiveDateTime) -> KpiSet {
    let mut kpis = KpiSet {
        total_generated: records.len() as u64,
        ..KpiSet::default()
    };

    for record in records {
        if record.category().is_closed() {
            kpis.total_closed += 1;
        }

        match record.display_status() {
            PENDING => kpis.pending += 1,
            WORK_IN_PROGRESS => kpis.work_in_progress += 1,
            OVERDUE => {
                kpis.overdue += 1;
                let escalated = record
                    .deviation_time
                    .map(|t| (as_of - t).num_days() > DEFAULT_OVERDUE_ESCALATION_DAYS)
                    .unwrap_or(false);
                if escalated {
                    kpis.overdue_beyond_three_days += 1;
                }
            }
            IMPLEMENTED => kpis.implemented += 1,
            REJECTED => kpis.rejected += 1,
            AUTO_CLOSED => kpis.auto_closed += 1,
            _ => {}
        }
    }

    kpis.total_active = kpis.total_generated - kpis.total_closed;
    kpis.utilization_rate = if kpis.total_generated > 0 {
        let rate = 100.0 * kpis.total_closed as f64 / kpis.total_generated as f64;
        (rate * 100.0).round() / 100.0
    } else {
        0.0
    };

    kpis
}
