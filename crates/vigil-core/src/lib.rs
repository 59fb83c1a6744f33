//! # vigil-core
//!
//! Core building blocks for the Vigil alert pipeline:
//! - `taxonomy` — status categories, display-status relabeling, roles, stages
//! - `models` — the canonical `AlertRecord` plus create/update payloads,
//!   filter specification, and aggregate view models
//! - `errors` — one error enum per subsystem, aggregated by `DashboardError`
//! - `config` — layered configuration (defaults ← `vigil.toml` ← `VIGIL_*`)
//! - `traits` — the `Clock` seam for timestamping
//! - `collections` — hash-map aliases shared across the pipeline
//! - `telemetry` — tracing subscriber bootstrap

pub mod collections;
pub mod config;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod telemetry;
pub mod traits;

pub use config::VigilConfig;
pub use errors::{
    ConfigError, DashboardError, ExportError, IngestError, RegistryError, StoreError,
};
pub use models::{
    AlertDraft, AlertPatch, AlertRecord, CrossTab, FilterSpec, KpiSet, RoleCount, StatusCount,
};
pub use taxonomy::{Role, StatusCategory};
pub use traits::{Clock, FixedClock, SystemClock};
