//! The canonical alert record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::taxonomy::{display_status, StatusCategory};

/// One maintenance/process deviation event.
///
/// Field names serialize in the sheet's camelCase vocabulary so the
/// presentation boundary sees the same names the upload carried.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    /// Unique, strictly increasing; assigned by the record store and
    /// immutable afterwards.
    pub request_id: u64,
    pub system_name: String,
    pub cause_tag_name: String,
    pub cause_tag_id: String,
    pub cause_message: String,
    pub cause_value_actual: String,
    pub cause_value_optimum: String,
    /// `|actual − optimum|` when both cause values parse as numbers.
    /// Derived; never trusted from the sheet.
    pub gap: Option<f64>,
    pub suggestion: String,
    pub cause_uom: String,
    /// Most recent prior occurrence of the same (system, tag) pair,
    /// stamped at creation.
    pub last_occurrence: String,
    /// When the deviation occurred. Write-once; `None` when the sheet
    /// value did not parse, which excludes the record from time-windowed
    /// views without deleting it.
    pub deviation_time: Option<NaiveDateTime>,
    /// When the record was last edited.
    pub last_modified_time: Option<NaiveDateTime>,
    /// Raw status text, open vocabulary. Classified view-only through
    /// `StatusCategory` and `display_status`.
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub stage_id: Option<u32>,
    pub current_assignee: String,
    /// Audit trail: the assignee *before* the most recent update.
    pub last_action_taken_by: String,
    pub comments: String,
}

impl AlertRecord {
    /// Coarse Active/Closed category of the raw status.
    pub fn category(&self) -> StatusCategory {
        StatusCategory::of(&self.status)
    }

    /// Fine-grained display label for the raw status.
    pub fn display_status(&self) -> &str {
        display_status(&self.status)
    }

    /// Month bucket key, `"<FullMonthName> <FourDigitYear>"`.
    /// `None` when the deviation time is unknown.
    pub fn month_key(&self) -> Option<String> {
        self.deviation_time
            .map(|t| t.format("%B %Y").to_string())
    }
}

/// Derive the gap between two cause-value strings.
///
/// Best-effort: both sides must parse as numbers, otherwise the gap is
/// unset rather than an error.
pub fn gap_between(actual: &str, optimum: &str) -> Option<f64> {
    let a: f64 = actual.trim().parse().ok()?;
    let o: f64 = optimum.trim().parse().ok()?;
    Some((a - o).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn gap_requires_both_sides_numeric() {
        assert_eq!(gap_between("10", "7"), Some(3.0));
        assert_eq!(gap_between("7", "10"), Some(3.0));
        assert_eq!(gap_between(" 2.5 ", "1"), Some(1.5));
        assert_eq!(gap_between("N/A", "7"), None);
        assert_eq!(gap_between("10", ""), None);
    }

    #[test]
    fn month_key_formats_full_month_and_year() {
        let record = AlertRecord {
            deviation_time: NaiveDate::from_ymd_opt(2024, 3, 7)
                .and_then(|d| d.and_hms_opt(9, 30, 0)),
            ..AlertRecord::default()
        };
        assert_eq!(record.month_key().as_deref(), Some("March 2024"));
    }

    #[test]
    fn month_key_is_none_without_deviation_time() {
        assert_eq!(AlertRecord::default().month_key(), None);
    }
}
