//! Layered configuration: compiled defaults ← optional `vigil.toml`
//! ← `VIGIL_*` environment overrides.

pub mod defaults;
pub mod ingest_config;
pub mod mapping_config;
pub mod vigil_config;

pub use ingest_config::IngestConfig;
pub use mapping_config::MappingConfig;
pub use vigil_config::VigilConfig;
