//! Dense system × status cross tabulation.
//!
//! Built dense from the start: the sparse groupby-then-backfill dance
//! the presentation layer would otherwise need is the bug this module
//! exists to prevent.

use vigil_core::collections::FxHashMap;
use vigil_core::models::{AlertRecord, CrossTab, CrossTabCell};

/// Cross-tabulate all records by (system, status).
///
/// Axes are the sorted distinct system names and raw status values of
/// the snapshot; every pairing gets a cell, zero counts included.
pub fn compute_status_cross_tab(records: &[AlertRecord]) -> CrossTab {
    let mut systems: Vec<String> = Vec::new();
    let mut statuses: Vec<String> = Vec::new();
    let mut counts: FxHashMap<(&str, &str), u64> = FxHashMap::default();

    for record in records {
        if !systems.contains(&record.system_name) {
            systems.push(record.system_name.clone());
        }
        if !statuses.contains(&record.status) {
            statuses.push(record.status.clone());
        }
        *counts
            .entry((record.system_name.as_str(), record.status.as_str()))
            .or_insert(0) += 1;
    }

    systems.sort();
    statuses.sort();

    let mut cells = Vec::with_capacity(systems.len() * statuses.len());
    for system in &systems {
        for status in &statuses {
            cells.push(CrossTabCell {
                system: system.clone(),
                status: status.clone(),
                count: counts
                    .get(&(system.as_str(), status.as_str()))
                    .copied()
                    .unwrap_or(0),
            });
        }
    }

    CrossTab {
        systems,
        statuses,
        cells,
    }
}
