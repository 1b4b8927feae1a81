use super::*;

#[test]
fn search_matches_name_and_sku() {
    let by_name = find_locations("bot");
    assert_eq!(by_name.len(), 2);
    assert_eq!(by_name[0].sku, "BOT-001");
    assert_eq!(by_name[1].sku, "BOT-002");

    let by_sku = find_locations("som-001");
    assert_eq!(by_sku.len(), 1);
    assert_eq!(by_sku[0].name, "Sombrero Texana Premium");
}

#[test]
fn blank_query_finds_nothing() {
    assert!(find_locations("").is_empty());
    assert!(find_locations("   ").is_empty());
}

#[test]
fn unknown_query_finds_nothing() {
    assert!(find_locations("hebilla dorada").is_empty());
}

#[test]
fn every_slot_names_the_main_warehouse() {
    for product in WAREHOUSE_STOCK {
        assert_eq!(product.warehouse, "Bodega Principal");
        assert!(product.aisle.starts_with("Pasillo"));
        assert!(product.shelf.starts_with("Repisa"));
        assert!(product.stock > 0);
    }
}
