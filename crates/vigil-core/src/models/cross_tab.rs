//! Dense system × status cross tabulation.

use serde::{Deserialize, Serialize};

/// Dense (system, status) count matrix.
///
/// Every pairing of a known system with a known status is present, zero
/// counts included — consumers render stacked charts and pivot tables
/// without backfilling missing combinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossTab {
    /// Sorted system names appearing in the snapshot.
    pub systems: Vec<String>,
    /// Sorted raw status values appearing in the snapshot.
    pub statuses: Vec<String>,
    /// `systems.len() × statuses.len()` cells, system-major.
    pub cells: Vec<CrossTabCell>,
}

/// One cell of the cross tabulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabCell {
    pub system: String,
    pub status: String,
    pub count: u64,
}

impl CrossTab {
    /// Count for a (system, status) pair; `None` when either axis value
    /// is not part of the snapshot.
    pub fn count(&self, system: &str, status: &str) -> Option<u64> {
        let row = self.systems.iter().position(|s| s == system)?;
        let col = self.statuses.iter().position(|s| s == status)?;
        self.cells.get(row * self.statuses.len() + col).map(|c| c.count)
    }
}
