//! Stage → role fallback table.
//!
//! Used only when the person→role registry has no entry for the
//! assignee; the stage identifier is a coarse phase indicator carried by
//! some datasets.

use super::role::Role;

/// Fixed stage→role assignments.
pub fn role_for_stage(stage_id: u32) -> Option<Role> {
    match stage_id {
        1 => Some(Role::ProcessEngineer),
        2 => Some(Role::ProcessManager),
        3 | 4 => Some(Role::OperationEngineer),
        _ => None,
    }
}
