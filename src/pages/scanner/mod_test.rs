use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Simulated reader catalog
// ============================================================================

#[test]
fn scan_catalog_has_unique_barcodes_and_skus() {
    for (i, a) in SCAN_PRODUCTS.iter().enumerate() {
        for b in &SCAN_PRODUCTS[i + 1..] {
            assert_ne!(a.barcode, b.barcode);
            assert_ne!(a.sku, b.sku);
        }
    }
}

#[test]
fn scan_catalog_matches_demo_data() {
    assert_eq!(SCAN_PRODUCTS.len(), 3);
    assert_eq!(SCAN_PRODUCTS[0].sku, "BOT-001");
    assert!(approx(SCAN_PRODUCTS[0].price, 3499.99));
    assert_eq!(SCAN_PRODUCTS[0].variants.len(), 4);
    assert_eq!(SCAN_PRODUCTS[2].variants, &["30 cm", "32 cm", "34 cm", "36 cm", "38 cm"]);
}

// ============================================================================
// Roll-to-product mapping
// ============================================================================

#[test]
fn pick_scan_walks_the_catalog_in_order() {
    assert_eq!(pick_scan(0.0).sku, "BOT-001");
    assert_eq!(pick_scan(0.5).sku, "SOM-001");
    assert_eq!(pick_scan(0.99).sku, "CIN-001");
}

#[test]
fn pick_scan_clamps_out_of_range_rolls() {
    assert_eq!(pick_scan(-0.3).sku, "BOT-001");
    assert_eq!(pick_scan(1.0).sku, "CIN-001");
    assert_eq!(pick_scan(42.0).sku, "CIN-001");
}
