use super::*;

// =============================================================
// Roster rollups
// =============================================================

#[test]
fn five_of_six_employees_are_active() {
    let roster = demo_employees();
    assert_eq!(roster.len(), 6);
    assert_eq!(active_count(&roster), 5);
}

#[test]
fn three_managers_run_the_chain() {
    assert_eq!(manager_count(&demo_employees()), 3);
}

#[test]
fn average_commission_includes_the_warehouse_zero() {
    let avg = average_commission(&demo_employees());
    assert!((avg - 1.75).abs() < 1e-9);
    assert!((average_commission(&[]) - 0.0).abs() < 1e-9);
}

// =============================================================
// Permissions
// =============================================================

#[test]
fn managers_hold_every_permission_cashiers_none() {
    for employee in demo_employees() {
        match employee.role {
            StaffRole::Encargado => {
                assert!(employee.permissions.discounts, "{}", employee.name);
                assert!(employee.permissions.cancel_sales, "{}", employee.name);
                assert!(employee.permissions.view_other_branches, "{}", employee.name);
            }
            StaffRole::Cajero => {
                assert!(!employee.permissions.discounts, "{}", employee.name);
                assert!(!employee.permissions.cancel_sales, "{}", employee.name);
            }
            StaffRole::Bodeguero => {
                assert!(employee.permissions.view_other_branches, "{}", employee.name);
                assert!(!employee.permissions.discounts, "{}", employee.name);
            }
        }
    }
}

// =============================================================
// Labels
// =============================================================

#[test]
fn role_labels_round_trip() {
    for role in StaffRole::ALL {
        assert_eq!(StaffRole::from_label(role.label()), role);
    }
    assert_eq!(StaffRole::from_label("Gerente"), StaffRole::Cajero);
}

#[test]
fn commissions_render_as_percent_or_na() {
    assert_eq!(commission_label(2.5), "2.5%");
    assert_eq!(commission_label(0.0), "N/A");
}
