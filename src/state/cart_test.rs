use super::*;
use crate::state::catalog::demo_products;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Line aggregation
// =============================================================

#[test]
fn adding_a_product_starts_a_line_at_quantity_one() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
    assert_eq!(cart.items[0].name, "Sombrero Texana Premium");
    assert_eq!(cart.items[0].sku.as_deref(), Some("SOM-001"));
}

#[test]
fn adding_the_same_product_and_variant_increments_the_line() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[1], Some("Talla 28".to_owned()));
    cart.add(&products[1], Some("Talla 28".to_owned()));
    cart.add(&products[1], Some("Talla 28".to_owned()));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
}

#[test]
fn different_variants_of_the_same_product_are_separate_lines() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[1], Some("Talla 28".to_owned()));
    cart.add(&products[1], Some("Talla 30".to_owned()));
    assert_eq!(cart.items.len(), 2);
}

#[test]
fn set_quantity_updates_the_matching_line() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.set_quantity("1", None, 5);
    assert_eq!(cart.items[0].quantity, 5);
}

#[test]
fn set_quantity_zero_or_below_removes_the_line() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.set_quantity("1", None, 0);
    assert!(cart.is_empty());

    cart.add(&products[0], None);
    cart.set_quantity("1", None, -3);
    assert!(cart.is_empty());
}

#[test]
fn step_quantity_moves_one_unit_at_a_time() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.step_quantity("1", None, true);
    cart.step_quantity("1", None, true);
    assert_eq!(cart.items[0].quantity, 3);
    cart.step_quantity("1", None, false);
    assert_eq!(cart.items[0].quantity, 2);
}

#[test]
fn step_quantity_down_from_one_removes_the_line() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.step_quantity("1", None, false);
    assert!(cart.is_empty());
}

#[test]
fn step_quantity_ignores_missing_lines() {
    let mut cart = Cart::default();
    cart.step_quantity("nope", None, true);
    assert!(cart.is_empty());
}

#[test]
fn remove_only_touches_the_matching_variant() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[1], Some("Talla 28".to_owned()));
    cart.add(&products[1], Some("Talla 30".to_owned()));
    cart.remove("2", Some("Talla 28"));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].variant.as_deref(), Some("Talla 30"));
}

#[test]
fn clear_empties_the_cart() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.add(&products[2], None);
    cart.clear();
    assert!(cart.is_empty());
}

// =============================================================
// Totals
// =============================================================

#[test]
fn totals_for_two_units_at_one_hundred_with_ten_percent_discount() {
    let product = Product {
        id: "p".to_owned(),
        name: "Prueba".to_owned(),
        price: 100.0,
        stock: 5,
        category: crate::state::catalog::Category::Accesorios,
        sku: "PRB-001".to_owned(),
        variants: Vec::new(),
    };
    let mut cart = Cart::default();
    cart.add(&product, None);
    cart.add(&product, None);
    cart.set_discount(10.0);

    assert!(approx(cart.subtotal(), 200.0));
    assert!(approx(cart.discount_amount(), 20.0));
    assert!(approx(cart.tax_amount(), 28.8));
    assert!(approx(cart.total(), 208.8));
}

#[test]
fn totals_without_discount_tax_the_full_subtotal() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[2], None);
    assert!(approx(cart.subtotal(), 599.99));
    assert!(approx(cart.discount_amount(), 0.0));
    assert!(approx(cart.tax_amount(), 599.99 * 0.16));
    assert!(approx(cart.total(), 599.99 * 1.16));
}

#[test]
fn full_discount_leaves_a_zero_total() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[0], None);
    cart.set_discount(100.0);
    assert!(approx(cart.total(), 0.0));
}

#[test]
fn set_discount_clamps_to_the_valid_range() {
    let mut cart = Cart::default();
    cart.set_discount(150.0);
    assert_eq!(cart.discount_percent, 100.0);
    cart.set_discount(-5.0);
    assert_eq!(cart.discount_percent, 0.0);
}

#[test]
fn totals_snapshot_matches_the_individual_figures() {
    let products = demo_products();
    let mut cart = Cart::default();
    cart.add(&products[4], Some("Talla 27".to_owned()));
    cart.set_discount(15.0);
    let totals = cart.totals();
    assert!(approx(totals.subtotal, cart.subtotal()));
    assert!(approx(totals.discount_amount, cart.discount_amount()));
    assert!(approx(totals.tax_amount, cart.tax_amount()));
    assert!(approx(totals.total, cart.total()));
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn cart_default_customer_is_the_walk_in_customer() {
    let cart = Cart::default();
    assert_eq!(cart.customer, "Cliente General");
    assert_eq!(cart.sale_type, SaleType::Normal);
    assert_eq!(cart.discount_percent, 0.0);
    assert!(cart.is_empty());
}

#[test]
fn sale_type_labels() {
    assert_eq!(SaleType::Normal.label(), "Venta Normal");
    assert_eq!(SaleType::Layaway.label(), "Apartado/Layaway");
    assert_eq!(SaleType::default(), SaleType::Normal);
}
