//! Record store errors.

/// Errors raised by create/update operations. The store is never
/// mutated when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("required field is empty: {field}")]
    Validation { field: String },

    #[error("no alert with request id {request_id}")]
    NotFound { request_id: u64 },
}
