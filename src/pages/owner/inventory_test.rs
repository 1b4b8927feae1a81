use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// Valuation
// =============================================================

#[test]
fn investment_sums_cost_times_stock() {
    assert!(approx(inventory_value(&demo_master_products()), 174_700.0));
}

#[test]
fn retail_value_sums_price_times_stock() {
    assert!(approx(retail_value(&demo_master_products()), 328_397.43));
}

#[test]
fn chain_holds_257_units_across_five_products() {
    let products = demo_master_products();
    assert_eq!(total_items(&products), 257);
    assert_eq!(products.len(), 5);
}

#[test]
fn margin_relates_price_to_cost() {
    let products = demo_master_products();
    let boots = products.iter().find(|p| p.sku == "BOT-005").unwrap();
    assert!((boots.margin_percent() - 69.23).abs() < 0.01);

    let free = MasterProduct {
        sku: "X",
        name: "x",
        cost: 0.0,
        price: 100.0,
        stock: [0; 4],
    };
    assert!(approx(free.margin_percent(), 0.0));
}

// =============================================================
// Transfers
// =============================================================

#[test]
fn transfer_moves_units_between_branches() {
    let mut stock = [15, 18, 8, 7];
    assert!(transfer_stock(&mut stock, 0, 2, 5));
    assert_eq!(stock, [10, 18, 13, 7]);
}

#[test]
fn transfer_rejects_overdraw_and_noops() {
    let mut stock = [15, 18, 8, 7];
    assert!(!transfer_stock(&mut stock, 2, 0, 9));
    assert!(!transfer_stock(&mut stock, 1, 1, 3));
    assert!(!transfer_stock(&mut stock, 0, 1, 0));
    assert!(!transfer_stock(&mut stock, 7, 0, 1));
    assert_eq!(stock, [15, 18, 8, 7]);
}

// =============================================================
// Adjustments
// =============================================================

#[test]
fn adjustment_adds_and_subtracts_per_branch() {
    let mut stock = [8, 6, 5, 4];
    assert!(adjust_stock(&mut stock, 1, true, 4));
    assert_eq!(stock, [8, 10, 5, 4]);
    assert!(adjust_stock(&mut stock, 3, false, 4));
    assert_eq!(stock, [8, 10, 5, 0]);
}

#[test]
fn adjustment_never_goes_below_zero() {
    let mut stock = [8, 6, 5, 4];
    assert!(!adjust_stock(&mut stock, 2, false, 6));
    assert_eq!(stock, [8, 6, 5, 4]);
}

#[test]
fn adjustment_rejects_zero_and_bad_branch() {
    let mut stock = [8, 6, 5, 4];
    assert!(!adjust_stock(&mut stock, 0, true, 0));
    assert!(!adjust_stock(&mut stock, 9, true, 1));
    assert_eq!(stock, [8, 6, 5, 4]);
}
