// Single source of truth for all default values.

// --- Ingest ---
/// Zero-based index of the true header row; everything above it is a
/// non-header artifact of the upstream export.
pub const DEFAULT_HEADER_ROW: usize = 1;
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_REQUIRED_COLUMNS: [&str; 4] =
    ["status", "systemName", "deviationTime", "currentAssignee"];

// --- Aggregation ---
/// Overdue alerts older than this many days count as escalated.
pub const DEFAULT_OVERDUE_ESCALATION_DAYS: i64 = 3;

// --- Telemetry ---
pub const DEFAULT_LOG_FILTER: &str = "info";
