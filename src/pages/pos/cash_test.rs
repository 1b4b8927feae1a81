use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Shift summary
// =============================================================

#[test]
fn expected_in_drawer_nets_the_demo_figures() {
    let summary = demo_shift_summary();
    assert!(approx(summary.opening, 500.0));
    assert!(approx(summary.cash_sales, 3250.0));
    assert!(approx(summary.withdrawals, 150.0));
    assert!(approx(summary.expected_in_drawer(), 3600.0));
}

// =============================================================
// Blind count
// =============================================================

#[test]
fn counted_total_sums_denominations_and_vouchers() {
    // 3 x $10 + 2 x $500 + $150.50 in vouchers.
    let coins = [0, 0, 0, 3];
    let bills = [0, 0, 0, 0, 2];
    assert!(approx(counted_total(&coins, &bills, 150.5), 1180.5));
}

#[test]
fn counted_total_of_nothing_is_zero() {
    assert!(approx(counted_total(&[0; 4], &[0; 5], 0.0), 0.0));
}

#[test]
fn parse_counts_degrades_garbage_to_zero() {
    let raw = vec![
        "3".to_owned(),
        "".to_owned(),
        "abc".to_owned(),
        " 7 ".to_owned(),
    ];
    assert_eq!(parse_counts(&raw), vec![3, 0, 0, 7]);
}

#[test]
fn denomination_tables_match_the_mexican_cash_run() {
    assert_eq!(COINS, [1, 2, 5, 10]);
    assert_eq!(BILLS, [20, 50, 100, 200, 500]);
}

// =============================================================
// Withdrawals
// =============================================================

#[test]
fn withdrawal_needs_amount_reason_and_evidence() {
    assert!(can_register_withdrawal("150", "Compra de comida", true));
    assert!(!can_register_withdrawal("", "Compra de comida", true));
    assert!(!can_register_withdrawal("150", "", true));
    assert!(!can_register_withdrawal("150", "Compra de comida", false));
}

#[test]
fn withdrawal_rejects_zero_and_invalid_amounts() {
    assert!(!can_register_withdrawal("0", "Pago a proveedor", true));
    assert!(!can_register_withdrawal("abc", "Pago a proveedor", true));
    assert!(!can_register_withdrawal("-20", "Pago a proveedor", true));
}
