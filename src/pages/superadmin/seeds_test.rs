use super::*;

// ============================================================================
// Seed content
// ============================================================================

#[test]
fn categories_cover_the_western_wear_basics() {
    let categories = seed_categories();
    assert_eq!(
        categories,
        ["Botas", "Zapatos", "Cinturones", "Sombreros", "Carteras", "Accesorios"]
    );
}

#[test]
fn materials_include_the_exotic_leathers() {
    let materials = seed_materials();
    assert_eq!(materials.len(), 7);
    assert!(materials.iter().any(|m| m == "Piel de Avestruz"));
    assert!(materials.iter().any(|m| m == "Piel de Cocodrilo"));
}

#[test]
fn sizes_run_from_22_to_30() {
    let sizes = seed_sizes();
    assert_eq!(sizes.len(), 9);
    assert_eq!(sizes.first().map(String::as_str), Some("22"));
    assert_eq!(sizes.last().map(String::as_str), Some("30"));
}

#[test]
fn color_seed_has_eight_entries() {
    assert_eq!(seed_colors().len(), 8);
}

// ============================================================================
// Catalog metadata
// ============================================================================

#[test]
fn every_catalog_has_distinct_copy() {
    for (i, catalog) in SeedCatalog::ALL.into_iter().enumerate() {
        for other in &SeedCatalog::ALL[i + 1..] {
            assert_ne!(catalog.title(), other.title());
            assert_ne!(catalog.placeholder(), other.placeholder());
            assert_ne!(catalog.add_label(), other.add_label());
        }
    }
}

#[test]
fn add_labels_use_the_singular_form() {
    assert_eq!(SeedCatalog::Categories.add_label(), "Agregar Categoría");
    assert_eq!(SeedCatalog::Materials.add_label(), "Agregar Material");
    assert_eq!(SeedCatalog::Colors.add_label(), "Agregar Color");
    assert_eq!(SeedCatalog::Sizes.add_label(), "Agregar Talla");
}

#[test]
fn placeholders_suggest_an_example() {
    for catalog in SeedCatalog::ALL {
        assert!(catalog.placeholder().starts_with("Ej: "));
    }
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn seed_lists_accept_new_entries_but_reject_duplicates() {
    let mut sizes = seed_sizes();
    assert!(add_entry(&mut sizes, "31"));
    assert!(!add_entry(&mut sizes, "22"));
    assert_eq!(sizes.len(), 10);
}

#[test]
fn preview_falls_back_when_a_catalog_is_emptied() {
    let mut colors = seed_colors();
    assert_eq!(preview_value(&colors, "Negro"), "Negro");

    colors.clear();
    assert_eq!(preview_value(&colors, "Negro"), "Negro");

    let custom = vec!["Morado".to_owned()];
    assert_eq!(preview_value(&custom, "Negro"), "Morado");
}
