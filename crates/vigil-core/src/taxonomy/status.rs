//! Status classification — coarse Active/Closed partition and the
//! fine-grained display relabeling.
//!
//! Both are views over the raw status string; the stored value is never
//! mutated.

use serde::{Deserialize, Serialize};

/// Raw status spellings observed in uploaded sheets.
pub const PENDING: &str = "Pending";
pub const WORK_IN_PROGRESS: &str = "Work In Progress";
pub const OVERDUE: &str = "Overdue";
pub const CLOSED_SYSTEM: &str = "Closed (System)";
pub const CLOSED_IMPLEMENTED: &str = "Closed (Implemented)";
pub const CLOSED_REJECTED: &str = "Closed (Rejected)";

/// Display labels produced by the fine-grained classifier.
pub const AUTO_CLOSED: &str = "Auto Closed";
pub const IMPLEMENTED: &str = "Implemented";
pub const REJECTED: &str = "Rejected";

/// Coarse partition of alerts into active and closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Active,
    Closed,
}

impl StatusCategory {
    /// Parse a raw status string. Any status whose lowercase form
    /// contains `"closed"` is `Closed`; everything else is `Active`.
    ///
    /// This substring rule is the single place the legacy free-text
    /// convention is interpreted.
    pub fn of(raw_status: &str) -> Self {
        if raw_status.to_lowercase().contains("closed") {
            Self::Closed
        } else {
            Self::Active
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }
}

/// Fine-grained relabeling for display and per-label KPI counting.
///
/// Maps the three closed spellings onto their display labels and leaves
/// every other status (including `Pending`, `Work In Progress`,
/// `Overdue`) untouched.
pub fn display_status(raw_status: &str) -> &str {
    match raw_status {
        CLOSED_SYSTEM => AUTO_CLOSED,
        CLOSED_IMPLEMENTED => IMPLEMENTED,
        CLOSED_REJECTED => REJECTED,
        other => other,
    }
}
