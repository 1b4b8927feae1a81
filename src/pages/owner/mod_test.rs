use super::*;

// =============================================================
// Sidebar wiring
// =============================================================

#[test]
fn sidebar_covers_every_owner_screen_once() {
    let items = sidebar_items();
    assert_eq!(items.len(), 7);
    for (i, (a, _, _)) in items.iter().enumerate() {
        for (b, _, _) in items.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn sidebar_opens_on_the_dashboard() {
    assert_eq!(sidebar_items()[0].0, OwnerScreen::default());
}

#[test]
fn sidebar_labels_are_distinct() {
    let items = sidebar_items();
    for (i, (_, a, _)) in items.iter().enumerate() {
        for (_, b, _) in items.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
