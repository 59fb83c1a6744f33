//! Facade-level error aggregation.

use super::{ConfigError, ExportError, IngestError, RegistryError, StoreError};

/// Errors surfaced by the session facade.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
