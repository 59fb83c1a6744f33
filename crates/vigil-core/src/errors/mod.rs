//! Error handling for Vigil.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dashboard_error;
pub mod export_error;
pub mod ingest_error;
pub mod registry_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use dashboard_error::DashboardError;
pub use export_error::ExportError;
pub use ingest_error::IngestError;
pub use registry_error::RegistryError;
pub use store_error::StoreError;
