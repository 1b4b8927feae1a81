use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Network rollups
// =============================================================

#[test]
fn network_sales_sum_all_four_branches() {
    assert!(approx(network_sales(&demo_branches()), 56_490.0));
}

#[test]
fn network_transactions_sum_all_four_branches() {
    assert_eq!(network_transactions(&demo_branches()), 382);
}

#[test]
fn south_branch_is_the_only_one_offline() {
    let branches = demo_branches();
    assert_eq!(online_count(&branches), 3);
    let offline: Vec<_> = branches
        .iter()
        .filter(|b| !b.online)
        .map(|b| b.name)
        .collect();
    assert_eq!(offline, vec!["Sucursal Sur"]);
}

#[test]
fn six_people_are_clocked_in_across_the_chain() {
    assert_eq!(active_staff_count(&demo_branches()), 6);
}

#[test]
fn rollups_of_no_branches_are_zero() {
    assert!(approx(network_sales(&[]), 0.0));
    assert_eq!(network_transactions(&[]), 0);
    assert_eq!(online_count(&[]), 0);
}
