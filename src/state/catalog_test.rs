use super::*;

// =============================================================
// Demo data
// =============================================================

#[test]
fn demo_catalog_has_six_products() {
    let products = demo_products();
    assert_eq!(products.len(), 6);
}

#[test]
fn demo_catalog_skus_are_unique() {
    let products = demo_products();
    for (i, a) in products.iter().enumerate() {
        for b in products.iter().skip(i + 1) {
            assert_ne!(a.sku, b.sku);
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn only_boot_products_carry_size_variants() {
    let products = demo_products();
    for product in &products {
        if product.has_variants() {
            assert_eq!(product.category, Category::Botas);
        }
    }
    let cuadra = &products[1];
    assert_eq!(cuadra.sku, "BOT-002");
    assert_eq!(cuadra.variants.len(), 5);
    assert_eq!(cuadra.variants[1].size, 27);
    assert_eq!(cuadra.variants[1].stock, 0);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_name_or_sku() {
    let products = demo_products();
    let by_name = filter_products(&products, "texana", CategoryFilter::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].sku, "SOM-001");

    let by_sku = filter_products(&products, "HEB-006", CategoryFilter::All);
    assert_eq!(by_sku.len(), 1);
    assert_eq!(by_sku[0].name, "Hebilla Grande Plata");
}

#[test]
fn filter_intersects_query_and_category() {
    let products = demo_products();
    let hats = filter_products(&products, "", CategoryFilter::Sombreros);
    assert_eq!(hats.len(), 2);

    let boots_named_sombrero = filter_products(&products, "sombrero", CategoryFilter::Botas);
    assert!(boots_named_sombrero.is_empty());
}

#[test]
fn filter_with_defaults_returns_everything() {
    let products = demo_products();
    let all = filter_products(&products, "", CategoryFilter::default());
    assert_eq!(all.len(), products.len());
}

#[test]
fn filter_with_no_match_returns_empty() {
    let products = demo_products();
    assert!(filter_products(&products, "tenis", CategoryFilter::All).is_empty());
}

// =============================================================
// Stock badges
// =============================================================

#[test]
fn stock_level_thresholds() {
    assert_eq!(stock_level(11), StockLevel::Healthy);
    assert_eq!(stock_level(10), StockLevel::Low);
    assert_eq!(stock_level(1), StockLevel::Low);
    assert_eq!(stock_level(0), StockLevel::Out);
}

#[test]
fn category_filter_labels() {
    assert_eq!(CategoryFilter::All.label(), "Todos");
    assert_eq!(CategoryFilter::Sombreros.label(), "Sombreros");
    assert_eq!(CategoryFilter::Botas.label(), "Botas");
    assert_eq!(CategoryFilter::Accesorios.label(), "Accesorios");
    assert_eq!(CategoryFilter::ALL.len(), 4);
}
