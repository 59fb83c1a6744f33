//! Session mapping registry — alias tables plus the person→role
//! registry, consulted at read time for role resolution.

use vigil_core::collections::FxHashMap;
use vigil_core::config::MappingConfig;
use vigil_core::errors::{ConfigError, RegistryError};
use vigil_core::models::AlertRecord;
use vigil_core::taxonomy::{role_for_stage, Role};

/// Process-wide, session-lifetime mapping tables.
///
/// Seeded from `MappingConfig` at session start and editable through
/// the admin surface. Nothing here is persisted; the registry dies with
/// the session.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    system_aliases: FxHashMap<String, String>,
    assignee_aliases: FxHashMap<String, String>,
    members: FxHashMap<String, Role>,
}

impl MappingRegistry {
    /// Seed a registry from configuration defaults.
    ///
    /// Role labels were already validated by `VigilConfig::validate`;
    /// an unparsable label still surfaces as a config error here so a
    /// hand-built `MappingConfig` cannot smuggle one in.
    pub fn from_config(config: &MappingConfig) -> Result<Self, ConfigError> {
        let mut members = FxHashMap::default();
        for (name, label) in &config.members {
            let role = Role::parse(label).ok_or_else(|| ConfigError::ValidationFailed {
                field: format!("mappings.members.{name}"),
                message: format!("unknown role label '{label}'"),
            })?;
            members.insert(name.trim().to_string(), role);
        }

        Ok(Self {
            system_aliases: config
                .system_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            assignee_aliases: config
                .assignee_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            members,
        })
    }

    /// Resolve a record's role: registry first, stage table second,
    /// `Other` last. Called at read time so registry edits are visible
    /// on the next read.
    pub fn resolve_role(&self, record: &AlertRecord) -> Role {
        if let Some(role) = self.members.get(record.current_assignee.trim()) {
            return *role;
        }
        record
            .stage_id
            .and_then(role_for_stage)
            .unwrap_or(Role::Other)
    }

    /// Add a new person to the registry.
    ///
    /// The trimmed name must be non-empty and not already registered
    /// (case-sensitive exact match); existing people change role via
    /// `set_role`.
    pub fn add_member(&mut self, name: &str, role: Role) -> Result<(), RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.members.contains_key(name) {
            return Err(RegistryError::DuplicateMember {
                name: name.to_string(),
            });
        }
        self.members.insert(name.to_string(), role);
        Ok(())
    }

    /// Change (or set) the role of a person. Always succeeds.
    pub fn set_role(&mut self, name: &str, role: Role) {
        self.members.insert(name.trim().to_string(), role);
    }

    /// Registry contents, sorted by name for deterministic rendering.
    pub fn members(&self) -> Vec<(String, Role)> {
        let mut entries: Vec<(String, Role)> = self
            .members
            .iter()
            .map(|(name, role)| (name.clone(), *role))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn set_system_alias(&mut self, from: &str, to: &str) {
        self.system_aliases.insert(from.to_string(), to.to_string());
    }

    pub fn set_assignee_alias(&mut self, from: &str, to: &str) {
        self.assignee_aliases
            .insert(from.to_string(), to.to_string());
    }

    pub fn system_aliases(&self) -> &FxHashMap<String, String> {
        &self.system_aliases
    }

    pub fn assignee_aliases(&self) -> &FxHashMap<String, String> {
        &self.assignee_aliases
    }
}
