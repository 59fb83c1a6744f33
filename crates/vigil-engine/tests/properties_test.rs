//! Property-based invariants of the pipeline.

use chrono::NaiveDate;
use proptest::prelude::*;
use vigil_core::collections::FxHashMap;
use vigil_core::models::AlertRecord;
use vigil_core::taxonomy::Role;
use vigil_engine::registry::MappingRegistry;
use vigil_engine::{
    apply_aliases, compute_kpis, compute_status_cross_tab, role_distribution,
};

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pending".to_string()),
        Just("Work In Progress".to_string()),
        Just("Overdue".to_string()),
        Just("Closed (System)".to_string()),
        Just("Closed (Implemented)".to_string()),
        Just("Closed (Rejected)".to_string()),
        "[A-Za-z ]{1,12}",
    ]
}

fn arb_record() -> impl Strategy<Value = AlertRecord> {
    (
        "[a-z]{1,8}",
        "[a-z]{1,8}",
        arb_status(),
        0u32..6,
        0u32..28,
    )
        .prop_map(|(system, assignee, status, stage, day_offset)| AlertRecord {
            system_name: system,
            current_assignee: assignee,
            status,
            stage_id: (stage > 0).then_some(stage),
            deviation_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .map(|d| d + chrono::Duration::days(i64::from(day_offset)))
                .and_then(|d| d.and_hms_opt(8, 0, 0)),
            ..AlertRecord::default()
        })
}

/// Alias tables whose keys (lowercase) and values (capitalized) are
/// disjoint by construction — the "normal configuration" under which
/// normalization must be idempotent.
fn arb_aliases() -> impl Strategy<Value = FxHashMap<String, String>> {
    proptest::collection::hash_map("[a-z]{1,8}", "[A-Z][a-z]{0,7}", 0..6)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn normalization_is_idempotent(
        records in proptest::collection::vec(arb_record(), 0..40),
        systems in arb_aliases(),
        assignees in arb_aliases(),
    ) {
        let once = apply_aliases(records, &systems, &assignees);
        let twice = apply_aliases(once.clone(), &systems, &assignees);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn kpi_totals_always_reconcile(
        records in proptest::collection::vec(arb_record(), 0..60),
    ) {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let kpis = compute_kpis(&records, as_of);

        prop_assert_eq!(kpis.total_generated, kpis.total_active + kpis.total_closed);
        if kpis.total_generated == 0 {
            prop_assert_eq!(kpis.utilization_rate, 0.0);
        } else {
            prop_assert!(kpis.utilization_rate >= 0.0);
            prop_assert!(kpis.utilization_rate <= 100.0);
        }
        prop_assert!(kpis.overdue_beyond_three_days <= kpis.overdue);
    }

    #[test]
    fn role_distribution_covers_exactly_the_active_records(
        records in proptest::collection::vec(arb_record(), 0..60),
    ) {
        let mut registry = MappingRegistry::default();
        registry.add_member("alice", Role::ProcessEngineer).unwrap();

        let dist = role_distribution(&records, &registry);
        let active = records.iter().filter(|r| r.category().is_active()).count() as u64;

        prop_assert_eq!(dist.iter().map(|c| c.count).sum::<u64>(), active);
        // Descending counts.
        prop_assert!(dist.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn cross_tab_is_dense_and_counts_every_record(
        records in proptest::collection::vec(arb_record(), 0..60),
    ) {
        let tab = compute_status_cross_tab(&records);

        prop_assert_eq!(tab.cells.len(), tab.systems.len() * tab.statuses.len());
        prop_assert_eq!(
            tab.cells.iter().map(|c| c.count).sum::<u64>(),
            records.len() as u64
        );
        for system in &tab.systems {
            for status in &tab.statuses {
                prop_assert!(tab.count(system, status).is_some());
            }
        }
    }
}
