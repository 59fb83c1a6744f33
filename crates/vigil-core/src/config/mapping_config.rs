use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Seed values for the session mapping registry.
///
/// Alias tables rewrite ingested identities (get-or-passthrough); the
/// member table seeds the person→role registry. All three are editable
/// at runtime through the session facade and live only for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Raw system name → canonical system name.
    pub system_aliases: BTreeMap<String, String>,
    /// Raw assignee name → canonical assignee name.
    pub assignee_aliases: BTreeMap<String, String>,
    /// Person → role label. Labels must parse as assignable roles.
    pub members: BTreeMap<String, String>,
}
