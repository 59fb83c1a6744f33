//! Sheet column vocabulary and required-column validation.

use vigil_core::collections::FxHashMap;
use vigil_core::errors::IngestError;

pub const REQUEST_ID: &str = "requestID";
pub const SYSTEM_NAME: &str = "systemName";
pub const CAUSE_TAG_NAME: &str = "odsCauseTagName";
pub const CAUSE_TAG_ID: &str = "odsCauseTagID";
pub const CAUSE_MESSAGE: &str = "causeMessage";
pub const CAUSE_VALUE_ACTUAL: &str = "causeValueActual";
pub const CAUSE_VALUE_OPTIMUM: &str = "causeValueOptimum";
pub const GAP: &str = "gap";
pub const SUGGESTION: &str = "suggestion";
pub const CAUSE_UOM: &str = "causeUom";
pub const LAST_OCCURRENCE: &str = "lastOccurrence";
pub const DEVIATION_TIME: &str = "deviationTime";
pub const LAST_MODIFIED_TIME: &str = "lastModifiedTime";
pub const STATUS: &str = "status";
pub const DUE_DATE: &str = "dueDate";
pub const STAGE_ID: &str = "stageID";
pub const CURRENT_ASSIGNEE: &str = "currentAssignee";
pub const LAST_ACTION_TAKEN_BY: &str = "lastActionTakenBy";
pub const COMMENTS: &str = "comments";

/// Column order for exported snapshots. Ingest accepts any order.
pub const EXPORT_COLUMNS: [&str; 19] = [
    REQUEST_ID,
    SYSTEM_NAME,
    CAUSE_TAG_NAME,
    CAUSE_TAG_ID,
    CAUSE_MESSAGE,
    CAUSE_VALUE_ACTUAL,
    CAUSE_VALUE_OPTIMUM,
    GAP,
    SUGGESTION,
    CAUSE_UOM,
    LAST_OCCURRENCE,
    DEVIATION_TIME,
    LAST_MODIFIED_TIME,
    STATUS,
    DUE_DATE,
    STAGE_ID,
    CURRENT_ASSIGNEE,
    LAST_ACTION_TAKEN_BY,
    COMMENTS,
];

/// Check that every required column is present, reporting all missing
/// columns at once.
pub fn validate_required(columns: &[String], required: &[String]) -> Result<(), IngestError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|r| !columns.iter().any(|c| c == *r))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns { columns: missing })
    }
}

/// Column name → position lookup for positional rows.
#[derive(Debug)]
pub struct ColumnIndex {
    positions: FxHashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new(columns: &[String]) -> Self {
        let positions = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { positions }
    }

    pub fn get(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}
