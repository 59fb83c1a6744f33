//! Identity normalization — alias rewriting of system and assignee
//! names.
//!
//! Pure get-or-passthrough over the session alias tables. Idempotent
//! under normal configuration: a mapped value is not itself a key, so a
//! second pass is a no-op.

use vigil_core::collections::FxHashMap;
use vigil_core::models::AlertRecord;

/// Rewrite `system_name`, `current_assignee`, and `last_action_taken_by`
/// through the alias tables. Unmapped values pass through unchanged;
/// mapping to an empty string is permitted and applied literally.
pub fn apply_aliases(
    mut records: Vec<AlertRecord>,
    system_aliases: &FxHashMap<String, String>,
    assignee_aliases: &FxHashMap<String, String>,
) -> Vec<AlertRecord> {
    for record in &mut records {
        rewrite(&mut record.system_name, system_aliases);
        rewrite(&mut record.current_assignee, assignee_aliases);
        rewrite(&mut record.last_action_taken_by, assignee_aliases);
    }
    records
}

fn rewrite(value: &mut String, aliases: &FxHashMap<String, String>) {
    if let Some(mapped) = aliases.get(value.as_str()) {
        mapped.clone_into(value);
    }
}
