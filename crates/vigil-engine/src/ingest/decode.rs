//! Row → record decoding with best-effort field parsing.
//!
//! Timestamps and numbers that fail to parse degrade to unset fields;
//! only structural problems (handled by the reader and schema checks)
//! abort an ingestion.

use chrono::{NaiveDate, NaiveDateTime};
use vigil_core::models::{gap_between, AlertRecord};

use super::reader::RawSheet;
use super::schema::{self, ColumnIndex};

/// Accepted timestamp spellings, tried in order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Accepted date-only spellings; parsed timestamps land at midnight.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Decode every data row of a validated sheet.
///
/// Rows whose `requestID` cell does not parse get id 0 here; the record
/// store assigns fresh monotonic ids above the maximum on bulk load.
pub fn decode_rows(sheet: &RawSheet) -> Vec<AlertRecord> {
    let index = ColumnIndex::new(&sheet.columns);
    sheet.rows.iter().map(|row| decode_row(&index, row)).collect()
}

fn decode_row(index: &ColumnIndex, row: &[String]) -> AlertRecord {
    let cell = |column: &str| -> String {
        index
            .get(column)
            .and_then(|i| row.get(i))
            .map(|v| v.to_string())
            .unwrap_or_default()
    };

    let cause_value_actual = cell(schema::CAUSE_VALUE_ACTUAL);
    let cause_value_optimum = cell(schema::CAUSE_VALUE_OPTIMUM);
    let gap = gap_between(&cause_value_actual, &cause_value_optimum);

    AlertRecord {
        request_id: parse_integer(&cell(schema::REQUEST_ID)).unwrap_or(0),
        system_name: cell(schema::SYSTEM_NAME),
        cause_tag_name: cell(schema::CAUSE_TAG_NAME),
        cause_tag_id: cell(schema::CAUSE_TAG_ID),
        cause_message: cell(schema::CAUSE_MESSAGE),
        cause_value_actual,
        cause_value_optimum,
        gap,
        suggestion: cell(schema::SUGGESTION),
        cause_uom: cell(schema::CAUSE_UOM),
        last_occurrence: cell(schema::LAST_OCCURRENCE),
        deviation_time: parse_timestamp(&cell(schema::DEVIATION_TIME)),
        last_modified_time: parse_timestamp(&cell(schema::LAST_MODIFIED_TIME)),
        status: cell(schema::STATUS),
        due_date: parse_date(&cell(schema::DUE_DATE)),
        stage_id: parse_integer(&cell(schema::STAGE_ID)).map(|v| v as u32),
        current_assignee: cell(schema::CURRENT_ASSIGNEE),
        last_action_taken_by: cell(schema::LAST_ACTION_TAKEN_BY),
        comments: cell(schema::COMMENTS),
    }
}

/// Parse a timestamp cell, trying full timestamps first and date-only
/// spellings (at midnight) second.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(value, format) {
            return Some(t);
        }
    }
    parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a date cell.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parse an integer cell, tolerating spreadsheet float renderings such
/// as `"2.0"`.
fn parse_integer(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(v) = value.parse::<u64>() {
        return Some(v);
    }
    let float: f64 = value.parse().ok()?;
    if float >= 0.0 && float.fract() == 0.0 {
        Some(float as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats_are_tolerated() {
        assert!(parse_timestamp("2024-03-07 09:30:00").is_some());
        assert!(parse_timestamp("2024-03-07T09:30:00").is_some());
        assert!(parse_timestamp("07/03/2024 09:30").is_some());
        assert_eq!(
            parse_timestamp("2024-03-07"),
            NaiveDate::from_ymd_opt(2024, 3, 7).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn garbage_timestamps_degrade_to_none() {
        assert_eq!(parse_timestamp("not a time"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("  "), None);
    }

    #[test]
    fn integer_cells_tolerate_float_renderings() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("2.0"), Some(2));
        assert_eq!(parse_integer("2.5"), None);
        assert_eq!(parse_integer("-3"), None);
        assert_eq!(parse_integer("n/a"), None);
    }

    #[test]
    fn decode_derives_gap_and_ignores_sheet_gap() {
        let sheet = RawSheet {
            columns: vec![
                "systemName".to_string(),
                "causeValueActual".to_string(),
                "causeValueOptimum".to_string(),
                "gap".to_string(),
            ],
            rows: vec![vec![
                "Utilities".to_string(),
                "10".to_string(),
                "7".to_string(),
                "999".to_string(),
            ]],
        };
        let records = decode_rows(&sheet);
        assert_eq!(records[0].gap, Some(3.0));
    }

    #[test]
    fn decode_handles_short_rows() {
        let sheet = RawSheet {
            columns: vec!["systemName".to_string(), "status".to_string()],
            rows: vec![vec!["Utilities".to_string()]],
        };
        let records = decode_rows(&sheet);
        assert_eq!(records[0].system_name, "Utilities");
        assert_eq!(records[0].status, "");
    }
}
