//! The owned session facade the presentation layer calls.
//!
//! One `Dashboard` per user session: constructed explicitly at session
//! start, replaced wholesale by a re-upload. All operations are plain
//! synchronous calls returning `Result`; modal flows, reruns, and chart
//! wiring live entirely outside this crate.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use vigil_core::collections::FxHashSet;
use vigil_core::errors::{ConfigError, DashboardError};
use vigil_core::models::{
    AlertDraft, AlertPatch, AlertRecord, CrossTab, FilterSpec, KpiSet, RoleCount, StatusCount,
};
use vigil_core::taxonomy::Role;
use vigil_core::traits::{Clock, SystemClock};
use vigil_core::VigilConfig;

use crate::aggregate;
use crate::ingest;
use crate::normalize;
use crate::registry::MappingRegistry;
use crate::store::RecordStore;

/// Per-tag descriptive defaults, mined from the loaded records.
///
/// Mirrors the create-alert auto-fill: the first record carrying a
/// non-empty value for a tag donates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefaults {
    pub cause_tag_id: String,
    pub cause_message: String,
    pub suggestion: String,
    pub cause_uom: String,
}

/// Session state: config, mapping registry, record store, clock.
pub struct Dashboard {
    config: VigilConfig,
    registry: MappingRegistry,
    store: RecordStore,
    clock: Box<dyn Clock>,
}

impl Dashboard {
    /// Construct a session with the system clock.
    pub fn new(config: VigilConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Construct a session with an explicit clock (tests, replays).
    pub fn with_clock(config: VigilConfig, clock: Box<dyn Clock>) -> Result<Self, ConfigError> {
        let registry = MappingRegistry::from_config(&config.mappings)?;
        Ok(Self {
            config,
            registry,
            store: RecordStore::new(),
            clock,
        })
    }

    // --- Ingestion ---

    /// Ingest an uploaded sheet: parse, normalize identities through the
    /// current alias tables, and replace the store contents.
    ///
    /// All-or-nothing: on error the previous records remain untouched.
    pub fn load_sheet(&mut self, bytes: &[u8]) -> Result<Vec<AlertRecord>, DashboardError> {
        let records = ingest::parse_sheet(bytes, &self.config.ingest)?;
        let records = normalize::apply_aliases(
            records,
            self.registry.system_aliases(),
            self.registry.assignee_aliases(),
        );
        self.store.load_records(records);
        info!(count = self.store.len(), "sheet loaded");
        Ok(self.store.snapshot())
    }

    /// Serialize the current records to CSV, header row included.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, DashboardError> {
        Ok(ingest::export_snapshot(self.store.records())?)
    }

    // --- Snapshots and list feeders ---

    pub fn snapshot(&self) -> Vec<AlertRecord> {
        self.store.snapshot()
    }

    /// Sorted distinct system names.
    pub fn list_systems(&self) -> Vec<String> {
        let mut systems: Vec<String> = self
            .dedup_strings(|r| (!r.system_name.is_empty()).then(|| r.system_name.clone()));
        systems.sort();
        systems
    }

    /// Sorted distinct raw statuses among active alerts.
    pub fn list_active_statuses(&self) -> Vec<String> {
        let mut statuses: Vec<String> = self.dedup_strings(|r| {
            (r.category().is_active() && !r.status.is_empty()).then(|| r.status.clone())
        });
        statuses.sort();
        statuses
    }

    /// Month bucket labels in chronological order.
    pub fn list_months(&self) -> Vec<String> {
        use chrono::Datelike;

        let mut seen = FxHashSet::default();
        let mut months: Vec<(i32, u32)> = Vec::new();
        for record in self.store.records() {
            if let Some(t) = record.deviation_time {
                let key = (t.year(), t.month());
                if seen.insert(key) {
                    months.push(key);
                }
            }
        }
        months.sort_unstable();
        months
            .into_iter()
            .filter_map(|(y, m)| {
                chrono::NaiveDate::from_ymd_opt(y, m, 1)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(aggregate::month_label)
            })
            .collect()
    }

    /// Sorted distinct assignees.
    pub fn list_assignees(&self) -> Vec<String> {
        let mut assignees: Vec<String> = self.dedup_strings(|r| {
            (!r.current_assignee.is_empty()).then(|| r.current_assignee.clone())
        });
        assignees.sort();
        assignees
    }

    /// Sorted distinct cause tags for one system.
    pub fn list_tags_for_system(&self, system: &str) -> Vec<String> {
        let mut tags: Vec<String> = self.dedup_strings(|r| {
            (r.system_name == system && !r.cause_tag_name.is_empty())
                .then(|| r.cause_tag_name.clone())
        });
        tags.sort();
        tags
    }

    /// Sorted distinct stage ids.
    pub fn list_stage_ids(&self) -> Vec<u32> {
        let mut seen = FxHashSet::default();
        let mut stages: Vec<u32> = Vec::new();
        for record in self.store.records() {
            if let Some(stage) = record.stage_id {
                if seen.insert(stage) {
                    stages.push(stage);
                }
            }
        }
        stages.sort_unstable();
        stages
    }

    // --- Aggregate views ---

    pub fn filter_records(&self, spec: &FilterSpec) -> Vec<AlertRecord> {
        aggregate::filter_records(self.store.records(), spec)
    }

    pub fn compute_kpis(&self, spec: &FilterSpec) -> KpiSet {
        aggregate::compute_kpis(&self.filter_records(spec), self.clock.now())
    }

    pub fn compute_role_distribution(&self, spec: &FilterSpec) -> Vec<RoleCount> {
        aggregate::role_distribution(&self.filter_records(spec), &self.registry)
    }

    pub fn compute_status_distribution(&self, spec: &FilterSpec) -> Vec<StatusCount> {
        aggregate::status_distribution(&self.filter_records(spec))
    }

    pub fn compute_status_cross_tab(&self, spec: &FilterSpec) -> CrossTab {
        aggregate::compute_status_cross_tab(&self.filter_records(spec))
    }

    // --- Create / update ---

    /// Create an alert, auto-filling empty descriptive fields from the
    /// tag's prior records and stamping its last occurrence.
    pub fn create_alert(&mut self, mut draft: AlertDraft) -> Result<u64, DashboardError> {
        let defaults = self.tag_defaults(&draft.cause_tag_name);
        if draft.cause_tag_id.is_empty() {
            draft.cause_tag_id = defaults.cause_tag_id;
        }
        if draft.cause_message.is_empty() {
            draft.cause_message = defaults.cause_message;
        }
        if draft.suggestion.is_empty() {
            draft.suggestion = defaults.suggestion;
        }
        if draft.cause_uom.is_empty() {
            draft.cause_uom = defaults.cause_uom;
        }
        if draft.last_occurrence.is_empty() {
            draft.last_occurrence = self
                .last_occurrence(&draft.system_name, &draft.cause_tag_name)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
        }

        let id = self.store.create(draft, self.clock.now())?;
        Ok(id)
    }

    pub fn update_alert(&mut self, request_id: u64, patch: AlertPatch) -> Result<(), DashboardError> {
        self.store.update(request_id, patch, self.clock.now())?;
        Ok(())
    }

    // --- Tag lookups ---

    /// First non-empty descriptive values seen for a tag.
    pub fn tag_defaults(&self, cause_tag_name: &str) -> TagDefaults {
        let mut defaults = TagDefaults::default();
        for record in self.store.records() {
            if record.cause_tag_name != cause_tag_name {
                continue;
            }
            if defaults.cause_tag_id.is_empty() && !record.cause_tag_id.is_empty() {
                defaults.cause_tag_id = record.cause_tag_id.clone();
            }
            if defaults.cause_message.is_empty() && !record.cause_message.is_empty() {
                defaults.cause_message = record.cause_message.clone();
            }
            if defaults.suggestion.is_empty() && !record.suggestion.is_empty() {
                defaults.suggestion = record.suggestion.clone();
            }
            if defaults.cause_uom.is_empty() && !record.cause_uom.is_empty() {
                defaults.cause_uom = record.cause_uom.clone();
            }
        }
        defaults
    }

    /// Latest deviation time among records of a (system, tag) pair.
    pub fn last_occurrence(&self, system: &str, cause_tag_name: &str) -> Option<NaiveDateTime> {
        self.store
            .records()
            .iter()
            .filter(|r| r.system_name == system && r.cause_tag_name == cause_tag_name)
            .filter_map(|r| r.deviation_time)
            .max()
    }

    // --- Admin: registry and aliases ---

    pub fn add_member(&mut self, name: &str, role: Role) -> Result<(), DashboardError> {
        self.registry.add_member(name, role)?;
        Ok(())
    }

    pub fn set_role(&mut self, name: &str, role: Role) {
        self.registry.set_role(name, role);
    }

    pub fn members(&self) -> Vec<(String, Role)> {
        self.registry.members()
    }

    /// Add or change a system alias. Takes effect at the next ingest.
    pub fn set_system_alias(&mut self, from: &str, to: &str) {
        self.registry.set_system_alias(from, to);
    }

    /// Add or change an assignee alias. Takes effect at the next ingest.
    pub fn set_assignee_alias(&mut self, from: &str, to: &str) {
        self.registry.set_assignee_alias(from, to);
    }

    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    fn dedup_strings<F>(&self, mut pick: F) -> Vec<String>
    where
        F: FnMut(&AlertRecord) -> Option<String>,
    {
        let mut seen = FxHashSet::default();
        let mut values = Vec::new();
        for record in self.store.records() {
            if let Some(value) = pick(record) {
                if seen.insert(value.clone()) {
                    values.push(value);
                }
            }
        }
        values
    }
}
