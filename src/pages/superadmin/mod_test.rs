use super::*;

// ============================================================================
// Sidebar catalog
// ============================================================================

#[test]
fn sidebar_covers_every_screen_once() {
    let items = sidebar_items();
    let screens: Vec<SuperAdminScreen> = items.iter().map(|(screen, _, _)| *screen).collect();

    for screen in [
        SuperAdminScreen::Dashboard,
        SuperAdminScreen::Tenants,
        SuperAdminScreen::Plans,
        SuperAdminScreen::Billing,
        SuperAdminScreen::Seeds,
        SuperAdminScreen::Logs,
    ] {
        assert_eq!(
            screens.iter().filter(|entry| **entry == screen).count(),
            1,
            "screen {screen:?} should appear exactly once"
        );
    }
}

#[test]
fn sidebar_starts_at_the_saas_overview() {
    let (first, label, icon) = sidebar_items()[0];
    assert_eq!(first, SuperAdminScreen::Dashboard);
    assert_eq!(first, SuperAdminScreen::default());
    assert_eq!(label, "SaaS Overview");
    assert_eq!(icon, "📊");
}

#[test]
fn sidebar_labels_are_distinct() {
    let items = sidebar_items();
    for (index, (_, label, _)) in items.iter().enumerate() {
        for (_, other, _) in &items[index + 1..] {
            assert_ne!(label, other);
        }
    }
}
