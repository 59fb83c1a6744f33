//! # vigil-engine
//!
//! The alert normalization and aggregation pipeline:
//!
//! - `ingest` — uploaded bytes → validated rows → typed records; export back out
//! - `normalize` — alias rewriting of system and assignee identities
//! - `registry` — session mapping tables and read-time role resolution
//! - `store` — the mutable canonical record table (create/update/snapshot)
//! - `aggregate` — pure filter and aggregation functions over snapshots
//! - `session` — the owned `Dashboard` facade the presentation layer calls
//!
//! Data flows strictly downward: ingest → normalize → store → aggregate.
//! Edits re-enter at the store and are visible to the next aggregation
//! read; there is no cached aggregate state.

pub mod aggregate;
pub mod ingest;
pub mod normalize;
pub mod registry;
pub mod session;
pub mod store;

pub use aggregate::{
    compute_kpis, compute_status_cross_tab, filter_records, month_label, role_distribution,
    status_distribution,
};
pub use ingest::{export_snapshot, parse_sheet};
pub use normalize::apply_aliases;
pub use registry::MappingRegistry;
pub use session::{Dashboard, TagDefaults};
pub use store::RecordStore;
