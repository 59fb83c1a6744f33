//! Role and status distributions.

use vigil_core::collections::FxHashMap;
use vigil_core::models::{AlertRecord, RoleCount, StatusCount};
use vigil_core::taxonomy::Role;

use crate::registry::MappingRegistry;

/// Group active alerts by resolved role, descending by count.
///
/// Roles are resolved at call time against the current registry, so an
/// admin edit is reflected by the next read. Ties keep the order roles
/// were first encountered in the snapshot (stable sort).
pub fn role_distribution(
    records: &[AlertRecord],
    registry: &MappingRegistry,
) -> Vec<RoleCount> {
    let mut order: FxHashMap<Role, usize> = FxHashMap::default();
    let mut counts: Vec<RoleCount> = Vec::new();

    for record in records {
        if record.category().is_closed() {
            continue;
        }
        let role = registry.resolve_role(record);
        match order.get(&role) {
            Some(&i) => counts[i].count += 1,
            None => {
                order.insert(role, counts.len());
                counts.push(RoleCount { role, count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Raw status value counts over all records, descending; ties keep
/// first-encountered order.
pub fn status_distribution(records: &[AlertRecord]) -> Vec<StatusCount> {
    let mut order: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<StatusCount> = Vec::new();

    for record in records {
        match order.get(record.status.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                order.insert(record.status.as_str(), counts.len());
                counts.push(StatusCount {
                    status: record.status.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
