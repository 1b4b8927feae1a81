use super::*;

#[test]
fn variant_label_carries_the_size() {
    assert_eq!(variant_label(27), "Talla 27");
    assert_eq!(variant_label(30), "Talla 30");
}

#[test]
fn line_count_label_pluralizes() {
    assert_eq!(line_count_label(0), "0 productos");
    assert_eq!(line_count_label(1), "1 producto");
    assert_eq!(line_count_label(3), "3 productos");
}

#[test]
fn stock_badge_class_follows_the_levels() {
    assert_eq!(stock_badge_class(15), "badge badge--ok");
    assert_eq!(stock_badge_class(8), "badge badge--warn");
    assert_eq!(stock_badge_class(0), "badge badge--danger");
}

#[test]
fn demo_customer_roster_starts_with_the_walk_in() {
    assert_eq!(DEMO_CUSTOMERS.len(), 4);
    assert_eq!(DEMO_CUSTOMERS[0], "Cliente General");
}
