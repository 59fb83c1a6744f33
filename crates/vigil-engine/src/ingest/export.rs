//! Snapshot export to a delimited byte stream.

use chrono::{NaiveDate, NaiveDateTime};
use vigil_core::errors::ExportError;
use vigil_core::models::AlertRecord;

use super::schema::EXPORT_COLUMNS;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialize a snapshot to CSV, header row included.
///
/// Round-trips every record field; unset optionals render as empty
/// cells.
pub fn export_snapshot(records: &[AlertRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(write_error)?;

    for record in records {
        writer
            .write_record([
                record.request_id.to_string(),
                record.system_name.clone(),
                record.cause_tag_name.clone(),
                record.cause_tag_id.clone(),
                record.cause_message.clone(),
                record.cause_value_actual.clone(),
                record.cause_value_optimum.clone(),
                record.gap.map(|g| g.to_string()).unwrap_or_default(),
                record.suggestion.clone(),
                record.cause_uom.clone(),
                record.last_occurrence.clone(),
                format_timestamp(record.deviation_time),
                format_timestamp(record.last_modified_time),
                record.status.clone(),
                format_date(record.due_date),
                record.stage_id.map(|s| s.to_string()).unwrap_or_default(),
                record.current_assignee.clone(),
                record.last_action_taken_by.clone(),
                record.comments.clone(),
            ])
            .map_err(write_error)?;
    }

    writer.into_inner().map_err(|e| ExportError::Write {
        message: e.to_string(),
    })
}

fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn write_error(e: csv::Error) -> ExportError {
    ExportError::Write {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_lists_every_column() {
        let bytes = export_snapshot(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header.split(',').count(), EXPORT_COLUMNS.len());
        assert!(header.starts_with("requestID,systemName"));
    }

    #[test]
    fn unset_optionals_render_empty() {
        let record = AlertRecord {
            request_id: 1,
            system_name: "Utilities".to_string(),
            ..AlertRecord::default()
        };
        let bytes = export_snapshot(&[record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("1,Utilities,"));
        // deviationTime, lastModifiedTime, dueDate, stageID, gap all empty
        assert!(row.contains(",,"));
    }
}
