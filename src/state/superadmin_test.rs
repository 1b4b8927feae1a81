use super::*;

#[test]
fn superadmin_screen_default_is_dashboard() {
    assert_eq!(SuperAdminScreen::default(), SuperAdminScreen::Dashboard);
}

#[test]
fn superadmin_screen_variants_are_distinct() {
    let variants = [
        SuperAdminScreen::Dashboard,
        SuperAdminScreen::Tenants,
        SuperAdminScreen::Plans,
        SuperAdminScreen::Billing,
        SuperAdminScreen::Seeds,
        SuperAdminScreen::Logs,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}
