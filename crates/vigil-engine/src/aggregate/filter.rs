//! Filter spec application and month bucketing.

use chrono::NaiveDateTime;
use vigil_core::models::{AlertRecord, FilterSpec, MonthFilter, SystemFilter};

/// Month bucket key for a timestamp: `"<FullMonthName> <FourDigitYear>"`.
pub fn month_label(t: NaiveDateTime) -> String {
    t.format("%B %Y").to_string()
}

/// Apply a filter spec to a snapshot, returning the matching records.
///
/// Date bounds are inclusive at date granularity. Records without a
/// parsed `deviation_time` are excluded only when the spec is
/// time-windowed; otherwise they pass through.
pub fn filter_records(records: &[AlertRecord], spec: &FilterSpec) -> Vec<AlertRecord> {
    records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect()
}

fn matches(record: &AlertRecord, spec: &FilterSpec) -> bool {
    if spec.is_time_windowed() {
        let Some(t) = record.deviation_time else {
            return false;
        };
        if let Some(from) = spec.date_from {
            if t.date() < from {
                return false;
            }
        }
        if let Some(to) = spec.date_to {
            if t.date() > to {
                return false;
            }
        }
        if let MonthFilter::Month(ref month) = spec.month {
            if month_label(t) != *month {
                return false;
            }
        }
    }

    if let SystemFilter::Only(ref system) = spec.system {
        if record.system_name != *system {
            return false;
        }
    }

    if !spec.category.matches(&record.cause_tag_name) {
        return false;
    }

    if spec.pending_only && !record.status.to_lowercase().contains("pending") {
        return false;
    }

    true
}
