//! Export errors.

/// Errors raised while serializing a snapshot to a tabular byte stream.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write tabular output: {message}")]
    Write { message: String },
}
