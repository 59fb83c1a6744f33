//! Filter & aggregation engine — pure functions over record snapshots.
//!
//! Aggregates are recomputed from the snapshot on every query; there is
//! no cached state to invalidate after an edit.

pub mod cross_tab;
pub mod distribution;
pub mod filter;
pub mod kpis;

pub use cross_tab::compute_status_cross_tab;
pub use distribution::{role_distribution, status_distribution};
pub use filter::{filter_records, month_label};
pub use kpis::compute_kpis;
