//! The mutable canonical record table.
//!
//! Append via `create`, field-level mutation via `update`, bulk
//! replacement via `load_records` on re-upload. Reads hand out cloned
//! snapshots so aggregation never observes a half-applied write; writes
//! validate before touching any field. There is no delete.

use chrono::NaiveDateTime;
use tracing::debug;
use vigil_core::errors::StoreError;
use vigil_core::models::{gap_between, AlertDraft, AlertPatch, AlertRecord};
use vigil_core::taxonomy::status::PENDING;

/// Session-scoped table of alert records with monotonic id assignment.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<AlertRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with freshly ingested records.
    ///
    /// Rows that arrived without a usable `requestID` (id 0) receive
    /// fresh ids above the maximum seen, preserving row order.
    pub fn load_records(&mut self, mut records: Vec<AlertRecord>) {
        let mut next = records.iter().map(|r| r.request_id).max().unwrap_or(0) + 1;
        for record in &mut records {
            if record.request_id == 0 {
                record.request_id = next;
                next += 1;
            }
        }
        debug!(count = records.len(), "record store loaded");
        self.records = records;
    }

    /// Create a single alert; returns the assigned request id.
    ///
    /// `status` defaults to `Pending`, `deviation_time` is stamped with
    /// `now`, and the audit field starts empty. Fails before any
    /// mutation when a required identity field is empty.
    pub fn create(&mut self, draft: AlertDraft, now: NaiveDateTime) -> Result<u64, StoreError> {
        if draft.system_name.trim().is_empty() {
            return Err(StoreError::Validation {
                field: "systemName".to_string(),
            });
        }
        if draft.cause_tag_name.trim().is_empty() {
            return Err(StoreError::Validation {
                field: "odsCauseTagName".to_string(),
            });
        }

        let request_id = self.next_request_id();
        let gap = gap_between(&draft.cause_value_actual, &draft.cause_value_optimum);
        let status = if draft.status.trim().is_empty() {
            PENDING.to_string()
        } else {
            draft.status
        };

        self.records.push(AlertRecord {
            request_id,
            system_name: draft.system_name,
            cause_tag_name: draft.cause_tag_name,
            cause_tag_id: draft.cause_tag_id,
            cause_message: draft.cause_message,
            cause_value_actual: draft.cause_value_actual,
            cause_value_optimum: draft.cause_value_optimum,
            gap,
            suggestion: draft.suggestion,
            cause_uom: draft.cause_uom,
            last_occurrence: draft.last_occurrence,
            deviation_time: Some(now),
            last_modified_time: None,
            status,
            due_date: draft.due_date,
            stage_id: draft.stage_id,
            current_assignee: draft.current_assignee,
            last_action_taken_by: String::new(),
            comments: draft.comments,
        });

        debug!(request_id, "alert created");
        Ok(request_id)
    }

    /// Apply a field-level patch to an existing alert.
    ///
    /// The audit field receives the assignee as it was *before* the
    /// patch; the gap is re-derived from the resulting cause values;
    /// `last_modified_time` is stamped. `deviation_time` is write-once
    /// and untouched here.
    pub fn update(
        &mut self,
        request_id: u64,
        patch: AlertPatch,
        now: NaiveDateTime,
    ) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.request_id == request_id)
            .ok_or(StoreError::NotFound { request_id })?;

        record.last_action_taken_by = record.current_assignee.clone();

        if let Some(value) = patch.cause_value_actual {
            record.cause_value_actual = value;
        }
        if let Some(value) = patch.cause_value_optimum {
            record.cause_value_optimum = value;
        }
        if let Some(value) = patch.status {
            record.status = value;
        }
        if let Some(value) = patch.due_date {
            record.due_date = Some(value);
        }
        if let Some(value) = patch.stage_id {
            record.stage_id = Some(value);
        }
        if let Some(value) = patch.current_assignee {
            record.current_assignee = value;
        }
        if let Some(value) = patch.comments {
            record.comments = value;
        }

        record.gap = gap_between(&record.cause_value_actual, &record.cause_value_optimum);
        record.last_modified_time = Some(now);

        debug!(request_id, "alert updated");
        Ok(())
    }

    /// Cloned snapshot of the full table.
    pub fn snapshot(&self) -> Vec<AlertRecord> {
        self.records.clone()
    }

    /// Borrowed view for in-crate aggregation; the public surface hands
    /// out copies only.
    pub(crate) fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next id to assign: `max(existing) + 1`, or 1 when empty.
    fn next_request_id(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.request_id)
            .max()
            .unwrap_or(0)
            + 1
    }
}
