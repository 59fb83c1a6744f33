//! Create/update payloads for the record store.
//!
//! The patch type deliberately omits the identity fields (`request_id`,
//! `system_name`, `cause_tag_name`), so an update cannot touch them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields for creating a single alert.
///
/// `system_name` and `cause_tag_name` are required (validated by the
/// store); everything else is optional payload. Descriptive fields left
/// empty are auto-filled from per-tag lookups by the session facade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDraft {
    pub system_name: String,
    pub cause_tag_name: String,
    pub cause_tag_id: String,
    pub cause_message: String,
    pub cause_value_actual: String,
    pub cause_value_optimum: String,
    pub suggestion: String,
    pub cause_uom: String,
    /// Most recent prior occurrence of the same (system, tag) pair;
    /// stamped by the session facade, empty when unknown.
    pub last_occurrence: String,
    /// Defaults to `Pending` when empty.
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub stage_id: Option<u32>,
    pub current_assignee: String,
    pub comments: String,
}

/// Field-level update for an existing alert. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPatch {
    pub cause_value_actual: Option<String>,
    pub cause_value_optimum: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub stage_id: Option<u32>,
    pub current_assignee: Option<String>,
    pub comments: Option<String>,
}
