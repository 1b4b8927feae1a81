use super::*;

#[test]
fn owner_screen_default_is_dashboard() {
    assert_eq!(OwnerScreen::default(), OwnerScreen::Dashboard);
}

#[test]
fn owner_screen_variants_are_distinct() {
    let variants = [
        OwnerScreen::Dashboard,
        OwnerScreen::Branches,
        OwnerScreen::Audit,
        OwnerScreen::Inventory,
        OwnerScreen::Personnel,
        OwnerScreen::Reports,
        OwnerScreen::Config,
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
