use super::*;

// ============================================================================
// Audit trail content
// ============================================================================

#[test]
fn demo_trail_has_six_entries_two_per_severity() {
    let logs = demo_logs();
    assert_eq!(logs.len(), 6);

    let ids: Vec<&str> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, ["L001", "L002", "L003", "L004", "L005", "L006"]);

    assert_eq!(count_by_severity(&logs, Severity::Info), 2);
    assert_eq!(count_by_severity(&logs, Severity::Warning), 2);
    assert_eq!(count_by_severity(&logs, Severity::Critical), 2);
}

#[test]
fn branch_deletion_is_traceable_to_user_and_ip() {
    let logs = demo_logs();
    let deletion = logs
        .iter()
        .find(|l| l.action == "DELETE_BRANCH")
        .expect("branch deletion entry");

    assert_eq!(deletion.user_name, "Juan Pérez");
    assert_eq!(deletion.ip, "192.168.1.45");
    assert_eq!(deletion.timestamp, "2024-12-12 15:30:45");
    assert_eq!(deletion.severity, Severity::Critical);
}

// ============================================================================
// Action classification
// ============================================================================

#[test]
fn destructive_actions_flag_as_critical() {
    assert_eq!(action_severity("DELETE_BRANCH"), Severity::Critical);
    assert_eq!(action_severity("DELETE_PRODUCT"), Severity::Critical);
    assert_eq!(action_severity("DELETE_USER"), Severity::Critical);
}

#[test]
fn risky_actions_flag_as_warning() {
    assert_eq!(action_severity("INVENTORY_ADJUSTMENT"), Severity::Warning);
    assert_eq!(action_severity("FAILED_LOGIN"), Severity::Warning);
    assert_eq!(action_severity("UPDATE_PRICES"), Severity::Warning);
    assert_eq!(action_severity("CREATE_USER"), Severity::Info);
}

#[test]
fn price_update_keeps_info_severity_but_a_flagged_action() {
    // The row logs as routine, the action column still draws attention.
    let logs = demo_logs();
    let update = logs
        .iter()
        .find(|l| l.action == "UPDATE_PRICES")
        .expect("price update entry");

    assert_eq!(update.severity, Severity::Info);
    assert_eq!(action_severity(update.action), Severity::Warning);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filters_combine_query_severity_and_tenant() {
    let logs = demo_logs();

    assert_eq!(filter_logs(&logs, "", None, None).len(), 6);
    assert_eq!(filter_logs(&logs, "juan", None, None).len(), 2);
    assert_eq!(filter_logs(&logs, "", Some(Severity::Critical), None).len(), 2);
    assert_eq!(filter_logs(&logs, "", None, Some("T001")).len(), 2);
    assert_eq!(
        filter_logs(&logs, "maría", Some(Severity::Info), Some("T001")).len(),
        2
    );
    assert_eq!(
        filter_logs(&logs, "juan", Some(Severity::Warning), None).len(),
        0
    );
}

#[test]
fn query_reaches_actions_and_details() {
    let logs = demo_logs();
    assert_eq!(filter_logs(&logs, "delete_", None, None).len(), 2);
    assert_eq!(filter_logs(&logs, "sin motivo", None, None).len(), 1);
}

#[test]
fn severity_dropdown_parses_to_an_optional_filter() {
    assert_eq!(Severity::from_value("info"), Some(Severity::Info));
    assert_eq!(Severity::from_value("warning"), Some(Severity::Warning));
    assert_eq!(Severity::from_value("critical"), Some(Severity::Critical));
    assert_eq!(Severity::from_value("all"), None);
    assert_eq!(Severity::from_value(""), None);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_produces_pretty_json_of_the_rows() {
    let logs = demo_logs();
    let payload = build_export(&logs);

    assert!(payload.starts_with('['));
    assert!(payload.contains("\"id\": \"L001\""));
    assert!(payload.contains("\"action\": \"DELETE_BRANCH\""));
    assert!(payload.contains("\"severity\": \"critical\""));

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&payload).expect("export should round-trip");
    assert_eq!(parsed.len(), 6);
}

#[test]
fn export_of_no_rows_is_an_empty_array() {
    assert_eq!(build_export(&[]), "[]");
}
