//! End-to-end pipeline tests over the free functions:
//! parse → normalize → store → aggregate.

use chrono::NaiveDate;
use vigil_core::collections::FxHashMap;
use vigil_core::config::IngestConfig;
use vigil_core::errors::IngestError;
use vigil_core::models::{FilterSpec, MonthFilter, SystemFilter};
use vigil_core::taxonomy::Role;
use vigil_engine::registry::MappingRegistry;
use vigil_engine::{
    apply_aliases, compute_kpis, compute_status_cross_tab, filter_records, parse_sheet,
    role_distribution, RecordStore,
};

const SHEET: &str = "\
ODS Alert Export,,,,,,,,
requestID, systemName ,odsCauseTagName,causeValueActual,causeValueOptimum, deviationTime ,status,stageID,currentAssignee,comments
1,HPC,Energy Drift,10,7,2024-03-01 08:00:00,Pending,1,smithj,
2,HPC,Throughput Drop,95,100,2024-03-05 14:30:00,Work In Progress,2,leea,
3,Boiler,Flare Emission,n/a,0,2024-04-02 09:15:00,Closed (System),3,smithj,auto closed by system
4,Boiler,Energy Drift,5,5,not a time,Overdue,4,unknown,
";

fn aliases(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn loaded_store() -> RecordStore {
    let records = parse_sheet(SHEET.as_bytes(), &IngestConfig::default()).unwrap();
    let records = apply_aliases(
        records,
        &aliases(&[("HPC", "HP Compressor")]),
        &aliases(&[("smithj", "John Smith"), ("leea", "Ann Lee")]),
    );
    let mut store = RecordStore::new();
    store.load_records(records);
    store
}

#[test]
fn sheet_parses_with_trimmed_header_and_typed_fields() {
    let records = parse_sheet(SHEET.as_bytes(), &IngestConfig::default()).unwrap();
    assert_eq!(records.len(), 4);

    // Trimmed " systemName " and " deviationTime " resolved.
    assert_eq!(records[0].system_name, "HPC");
    assert_eq!(
        records[0].deviation_time,
        NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_opt(8, 0, 0))
    );

    // Gap derived where both cause values are numeric.
    assert_eq!(records[0].gap, Some(3.0));
    assert_eq!(records[1].gap, Some(5.0));
    assert_eq!(records[2].gap, None);
    assert_eq!(records[3].gap, Some(0.0));

    // Unparsable deviation time degrades to None, row retained.
    assert_eq!(records[3].deviation_time, None);
    assert_eq!(records[3].status, "Overdue");
}

#[test]
fn missing_required_columns_abort_with_full_list() {
    let sheet = "artifact,,\nrequestID,comments,gap\n1,,\n";
    let err = parse_sheet(sheet.as_bytes(), &IngestConfig::default()).unwrap_err();
    match err {
        IngestError::MissingColumns { columns } => {
            assert_eq!(
                columns,
                vec!["status", "systemName", "deviationTime", "currentAssignee"]
            );
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn normalization_rewrites_identities_before_load() {
    let store = loaded_store();
    let snapshot = store.snapshot();

    assert!(snapshot.iter().all(|r| r.system_name != "HPC"));
    assert_eq!(snapshot[0].system_name, "HP Compressor");
    assert_eq!(snapshot[0].current_assignee, "John Smith");
    // Unmapped assignee passes through.
    assert_eq!(snapshot[3].current_assignee, "unknown");
}

#[test]
fn month_filter_windows_the_kpis() {
    let store = loaded_store();
    let snapshot = store.snapshot();

    let march = filter_records(
        &snapshot,
        &FilterSpec {
            month: MonthFilter::Month("March 2024".to_string()),
            ..FilterSpec::default()
        },
    );
    // Row 4 has no parsed time and is excluded from the window.
    assert_eq!(march.len(), 2);

    let as_of = NaiveDate::from_ymd_opt(2024, 4, 30)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    let kpis = compute_kpis(&march, as_of);
    assert_eq!(kpis.total_generated, 2);
    assert_eq!(kpis.total_closed, 0);
    assert_eq!(kpis.pending, 1);
    assert_eq!(kpis.work_in_progress, 1);
    assert_eq!(kpis.utilization_rate, 0.0);
}

#[test]
fn unfiltered_kpis_reconcile_and_rate_is_rounded() {
    let store = loaded_store();
    let as_of = NaiveDate::from_ymd_opt(2024, 4, 30)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    let kpis = compute_kpis(&store.snapshot(), as_of);

    assert_eq!(kpis.total_generated, 4);
    assert_eq!(kpis.total_closed, 1);
    assert_eq!(kpis.total_active, 3);
    assert_eq!(kpis.auto_closed, 1);
    // 100 / 4
    assert_eq!(kpis.utilization_rate, 25.0);
}

#[test]
fn role_distribution_uses_registry_then_stage_then_other() {
    let store = loaded_store();
    let mut registry = MappingRegistry::default();
    registry.add_member("John Smith", Role::ProcessEngineer).unwrap();

    let dist = role_distribution(&store.snapshot(), &registry);

    // Active rows: 1 (John Smith → registry), 2 (stage 2 → Process
    // Manager), 4 (stage 4 → Operation Engineer). Row 3 is closed.
    let as_pairs: Vec<(Role, u64)> = dist.iter().map(|c| (c.role, c.count)).collect();
    assert_eq!(as_pairs.len(), 3);
    assert!(as_pairs.contains(&(Role::ProcessEngineer, 1)));
    assert!(as_pairs.contains(&(Role::ProcessManager, 1)));
    assert!(as_pairs.contains(&(Role::OperationEngineer, 1)));
}

#[test]
fn cross_tab_is_dense_over_the_filtered_snapshot() {
    let store = loaded_store();
    let boiler_only = filter_records(
        &store.snapshot(),
        &FilterSpec {
            system: SystemFilter::Only("Boiler".to_string()),
            ..FilterSpec::default()
        },
    );
    assert_eq!(boiler_only.len(), 2);

    let tab = compute_status_cross_tab(&store.snapshot());
    assert_eq!(tab.systems, vec!["Boiler", "HP Compressor"]);
    assert_eq!(tab.cells.len(), tab.systems.len() * tab.statuses.len());
    // Boiler never went Pending but the cell exists with zero.
    assert_eq!(tab.count("Boiler", "Pending"), Some(0));
    assert_eq!(tab.count("HP Compressor", "Pending"), Some(1));
}
