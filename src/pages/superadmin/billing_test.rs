use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Payment history
// ============================================================================

#[test]
fn demo_history_covers_all_three_states() {
    let payments = demo_payments();
    assert_eq!(payments.len(), 4);

    let ids: Vec<&str> = payments.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["P001", "P002", "P003", "P004"]);

    let overdue = &payments[2];
    assert_eq!(overdue.tenant_name, "Moda Total");
    assert_eq!(overdue.status, PaymentStatus::Overdue);
    assert!(overdue.paid_date.is_none());
    assert!(overdue.method.is_none());
}

#[test]
fn settled_payments_carry_date_and_method() {
    let payments = demo_payments();
    for payment in payments.iter().filter(|p| p.status == PaymentStatus::Paid) {
        assert!(payment.paid_date.is_some());
        assert!(payment.method.is_some());
    }
}

#[test]
fn totals_split_by_status() {
    let payments = demo_payments();
    assert!(approx(total_by_status(&payments, PaymentStatus::Paid), 2_798.0));
    assert!(approx(
        total_by_status(&payments, PaymentStatus::Pending),
        1_999.0
    ));
    assert!(approx(
        total_by_status(&payments, PaymentStatus::Overdue),
        4_999.0
    ));
}

// ============================================================================
// Manual capture
// ============================================================================

#[test]
fn next_id_continues_the_sequence() {
    assert_eq!(next_payment_id(4), "P005");
    assert_eq!(next_payment_id(0), "P001");
}

#[test]
fn method_values_map_to_row_labels() {
    assert_eq!(payment_method_label("transfer"), "Transferencia");
    assert_eq!(payment_method_label("cash"), "Efectivo");
    assert_eq!(payment_method_label("check"), "Cheque");
    assert_eq!(payment_method_label("other"), "Otro");
    assert_eq!(payment_method_label("garbage"), "Otro");
}

#[test]
fn registering_requires_a_tenant_and_a_valid_amount() {
    assert!(can_register_payment("T001", "1999.00"));
    assert!(!can_register_payment("", "1999.00"));
    assert!(!can_register_payment("T001", ""));
    assert!(!can_register_payment("T001", "mil"));
}

#[test]
fn tenant_lookup_resolves_names() {
    assert_eq!(billing_tenant("T003"), Some(("T003", "Moda Total")));
    assert_eq!(billing_tenant("T999"), None);
    assert_eq!(billing_tenant(""), None);
}

// ============================================================================
// Rendering helpers
// ============================================================================

#[test]
fn missing_values_render_as_a_muted_dash() {
    assert_eq!(dash_cell(Some("2024-12-01")), ("", "2024-12-01"));
    assert_eq!(dash_cell(None), ("table__cell--muted", "-"));
}

#[test]
fn upcoming_reminders_stay_within_five_days() {
    for entry in upcoming_payments() {
        assert!(entry.days_left >= 1 && entry.days_left <= 5);
        assert!(entry.amount > 0.0);
    }
}
