//! Ingestion errors.

/// Errors raised while turning an uploaded byte stream into records.
///
/// Every variant aborts the whole ingestion attempt; there is no partial
/// import and no retry beyond the caller re-uploading a corrected file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("sheet has {rows} row(s); expected a discarded first row, a header row, and data")]
    NotEnoughRows { rows: usize },

    #[error("duplicate column name after trimming: {column}")]
    DuplicateColumn { column: String },

    #[error("missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("malformed sheet: {message}")]
    Malformed { message: String },
}
