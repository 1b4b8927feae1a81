use super::*;
use crate::pages::scanner::SCAN_PRODUCTS;

// ============================================================================
// Count merging
// ============================================================================

#[test]
fn repeated_scans_merge_into_one_line() {
    let mut items = Vec::new();
    assert!(add_count(&mut items, SCAN_PRODUCTS[0], 3));
    assert!(add_count(&mut items, SCAN_PRODUCTS[1], 2));
    assert!(add_count(&mut items, SCAN_PRODUCTS[0], 4));

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sku, "BOT-001");
    assert_eq!(items[0].quantity, 7);
    assert_eq!(items[1].quantity, 2);
}

#[test]
fn zero_counts_are_dropped() {
    let mut items = Vec::new();
    assert!(!add_count(&mut items, SCAN_PRODUCTS[0], 0));
    assert!(items.is_empty());
}

#[test]
fn merged_lines_keep_catalog_identity() {
    let mut items = Vec::new();
    add_count(&mut items, SCAN_PRODUCTS[2], 5);
    assert_eq!(items[0].barcode, "345678");
    assert_eq!(items[0].name, "Cinturón Piel de Res");
}

// ============================================================================
// Count-entry guard
// ============================================================================

#[test]
fn count_guard_needs_a_positive_integer() {
    assert!(can_confirm_count("3"));
    assert!(can_confirm_count(" 12 "));
    assert!(!can_confirm_count(""));
    assert!(!can_confirm_count("0"));
    assert!(!can_confirm_count("-2"));
    assert!(!can_confirm_count("2.5"));
    assert!(!can_confirm_count("tres"));
}
