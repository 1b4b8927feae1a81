use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Method selection
// =============================================================

#[test]
fn default_form_is_cash_with_print_enabled() {
    let form = CheckoutForm::default();
    assert_eq!(form.method, PaymentMethod::Cash);
    assert!(!form.mixed);
    assert!(form.print_ticket);
    assert!(!form.send_whatsapp);
    assert!(form.cash_received.is_empty());
    assert!(form.card_amount.is_empty());
}

#[test]
fn selecting_any_method_turns_mixed_off() {
    let mut form = CheckoutForm::default();
    form.set_mixed(true);
    form.select_method(PaymentMethod::Card);
    assert_eq!(form.method, PaymentMethod::Card);
    assert!(!form.mixed);

    form.set_mixed(true);
    form.select_method(PaymentMethod::Cash);
    assert!(!form.mixed);
}

#[test]
fn cash_inputs_show_for_cash_or_mixed() {
    let mut form = CheckoutForm::default();
    assert!(form.wants_cash());

    form.select_method(PaymentMethod::Transfer);
    assert!(!form.wants_cash());

    form.set_mixed(true);
    assert!(form.wants_cash());
}

#[test]
fn payment_method_labels() {
    assert_eq!(PaymentMethod::Cash.label(), "Efectivo");
    assert_eq!(PaymentMethod::Card.label(), "Tarjeta");
    assert_eq!(PaymentMethod::Transfer.label(), "Transferencia");
    assert_eq!(PaymentMethod::ALL.len(), 3);
}

// =============================================================
// Cash validation and change
// =============================================================

#[test]
fn cash_short_of_the_total_cannot_complete() {
    let mut form = CheckoutForm::default();
    form.cash_received = "200".to_owned();
    assert!(!form.can_complete(208.8));
    assert!(approx(form.shortfall(208.8).unwrap(), 8.8));
    assert!(approx(form.change_due(208.8), 0.0));
}

#[test]
fn cash_over_the_total_returns_change() {
    let mut form = CheckoutForm::default();
    form.cash_received = "250".to_owned();
    assert!(form.can_complete(208.8));
    assert!(approx(form.change(208.8), 41.2));
    assert!(approx(form.change_due(208.8), 41.2));
    assert_eq!(form.shortfall(208.8), None);
}

#[test]
fn exact_cash_completes_with_zero_change() {
    let mut form = CheckoutForm::default();
    form.cash_received = "500".to_owned();
    assert!(form.can_complete(500.0));
    assert!(approx(form.change(500.0), 0.0));
}

#[test]
fn unparseable_cash_counts_as_zero() {
    let mut form = CheckoutForm::default();
    form.cash_received = "abc".to_owned();
    assert!(!form.can_complete(100.0));
    assert!(approx(form.shortfall(100.0).unwrap(), 100.0));
}

// =============================================================
// Card and transfer
// =============================================================

#[test]
fn card_and_transfer_have_no_numeric_guard() {
    let mut form = CheckoutForm::default();
    form.select_method(PaymentMethod::Card);
    assert!(form.can_complete(10_000.0));

    form.select_method(PaymentMethod::Transfer);
    assert!(form.can_complete(10_000.0));
}

// =============================================================
// Mixed payments
// =============================================================

#[test]
fn mixed_payment_sums_cash_and_card() {
    let mut form = CheckoutForm::default();
    form.set_mixed(true);
    form.cash_received = "100".to_owned();
    form.card_amount = "100".to_owned();
    assert!(!form.can_complete(208.8));

    form.card_amount = "120".to_owned();
    assert!(form.can_complete(208.8));
}

#[test]
fn mixed_change_only_covers_the_cash_portion() {
    let mut form = CheckoutForm::default();
    form.set_mixed(true);
    form.cash_received = "150".to_owned();
    form.card_amount = "100".to_owned();
    // Card covers 100 of 208.8, so cash owes 108.8 and 150 returns 41.2.
    assert!(approx(form.change(208.8), 41.2));
}

#[test]
fn mixed_with_empty_amounts_cannot_complete() {
    let mut form = CheckoutForm::default();
    form.set_mixed(true);
    assert!(!form.can_complete(1.0));
}
