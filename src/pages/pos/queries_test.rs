use super::*;

// =============================================================
// Price lookup
// =============================================================

#[test]
fn blank_query_shows_no_result() {
    assert!(price_result("").is_none());
    assert!(price_result("   ").is_none());
}

#[test]
fn any_code_resolves_to_the_lookup_product() {
    let (name, price, sku) = price_result("BOT-002").unwrap();
    assert_eq!(name, "Botas Cuadra Avestruz");
    assert!((price - 3499.99).abs() < 1e-9);
    assert_eq!(sku, "BOT-002");
}

// =============================================================
// Network stock
// =============================================================

#[test]
fn network_total_sums_every_branch() {
    assert_eq!(network_total(), 15);
}

#[test]
fn network_stock_covers_three_branches() {
    assert_eq!(NETWORK_STOCK.len(), 3);
    assert_eq!(NETWORK_STOCK[0].0, "Sucursal Norte");
}
