use super::*;

#[test]
fn submit_needs_both_fields() {
    assert!(!can_open_shift("", ""));
    assert!(!can_open_shift("María García", ""));
    assert!(!can_open_shift("", "500"));
    assert!(can_open_shift("María García", "500"));
}

#[test]
fn submit_rejects_invalid_amounts() {
    assert!(!can_open_shift("María García", "abc"));
    assert!(!can_open_shift("María García", "-100"));
    assert!(can_open_shift("María García", "0"));
    assert!(can_open_shift("María García", "750.50"));
}

#[test]
fn demo_cashier_roster_matches_the_branch() {
    assert_eq!(CASHIERS.len(), 4);
    assert!(CASHIERS.contains(&"María García"));
    assert_eq!(BRANCH_NAME, "Sucursal Norte");
}
