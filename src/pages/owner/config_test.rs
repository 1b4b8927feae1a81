use super::*;

// ============================================================================
// Seed catalogs
// ============================================================================

#[test]
fn seed_catalogs_match_launch_data() {
    assert_eq!(demo_brands(), ["Cuadra", "Laredo", "Resistol", "Stetson"]);
    assert_eq!(demo_colors(), ["Negro", "Café", "Beige", "Gris"]);
    assert_eq!(demo_sizes(), ["25", "26", "27", "28", "29", "30"]);
}

#[test]
fn seed_catalogs_accept_new_entries() {
    let mut brands = demo_brands();
    assert!(add_entry(&mut brands, "Justin"));
    assert_eq!(brands.len(), 5);
    // Duplicates are rejected case-insensitively.
    assert!(!add_entry(&mut brands, "  cuadra  "));
    assert_eq!(brands.len(), 5);
}

// ============================================================================
// Promotions
// ============================================================================

#[test]
fn demo_promos_have_one_active_rule() {
    let promos = demo_promos();
    assert_eq!(promos.len(), 2);
    assert!(promos[0].active);
    assert_eq!(promos[0].name, "Fin de Año");
    assert_eq!(promos[0].detail, "10% de descuento en toda la tienda");
    assert!(!promos[1].active);
    assert_eq!(promos[1].name, "Black Friday");
    assert_eq!(promos[1].detail, "20% de descuento en Botas");
}

#[test]
fn promo_detail_names_the_scope() {
    assert_eq!(
        promo_detail(10, "Toda la tienda"),
        "10% de descuento en toda la tienda"
    );
    assert_eq!(promo_detail(20, "Solo Botas"), "20% de descuento en Botas");
    assert_eq!(
        promo_detail(15, "Solo Sombreros"),
        "15% de descuento en Sombreros"
    );
}

#[test]
fn promo_validity_requires_both_dates() {
    assert_eq!(
        promo_validity("01 Dic", "31 Dic 2025"),
        "Válido: 01 Dic - 31 Dic 2025"
    );
    assert_eq!(promo_validity("", "31 Dic 2025"), "Vigencia por definir");
    assert_eq!(promo_validity("01 Dic", "  "), "Vigencia por definir");
}

#[test]
fn promo_creation_needs_name_and_valid_percent() {
    assert!(can_create_promo("Navidad 2025", "15"));
    assert!(can_create_promo("Navidad 2025", " 100 "));
    assert!(!can_create_promo("  ", "15"));
    assert!(!can_create_promo("Navidad 2025", ""));
    assert!(!can_create_promo("Navidad 2025", "0"));
    assert!(!can_create_promo("Navidad 2025", "101"));
    assert!(!can_create_promo("Navidad 2025", "quince"));
}

#[test]
fn promo_scopes_cover_store_and_categories() {
    assert_eq!(PROMO_SCOPES.len(), 4);
    assert_eq!(PROMO_SCOPES[0], "Toda la tienda");
}
