use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn scanner_starts_unlinked_on_the_link_screen() {
    let state = ScannerState::default();
    assert_eq!(state.mode, ScannerMode::Link);
    assert!(!state.linked);
}

#[test]
fn scanner_mode_variants_are_distinct() {
    let variants = [
        ScannerMode::Link,
        ScannerMode::Standby,
        ScannerMode::Photo,
        ScannerMode::Inventory,
        ScannerMode::Price,
        ScannerMode::Evidence,
        ScannerMode::Location,
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

// =============================================================
// Link lifecycle
// =============================================================

#[test]
fn linking_lands_on_standby() {
    let mut state = ScannerState::default();
    state.link();
    assert!(state.linked);
    assert_eq!(state.mode, ScannerMode::Standby);
}

#[test]
fn disconnect_returns_to_the_link_screen() {
    let mut state = ScannerState::default();
    state.link();
    state.disconnect();
    assert!(!state.linked);
    assert_eq!(state.mode, ScannerMode::Link);
}

// =============================================================
// Back targets
// =============================================================

#[test]
fn linked_tools_return_to_standby() {
    let mut state = ScannerState::default();
    state.link();
    state.open_tool(ScannerMode::Price);
    assert_eq!(state.back_target(), ScannerMode::Standby);
    state.go_back();
    assert_eq!(state.mode, ScannerMode::Standby);
}

#[test]
fn unlinked_tools_return_to_the_link_screen() {
    let mut state = ScannerState::default();
    state.open_tool(ScannerMode::Inventory);
    assert_eq!(state.back_target(), ScannerMode::Link);
    state.go_back();
    assert_eq!(state.mode, ScannerMode::Link);
}

#[test]
fn photo_always_returns_to_standby() {
    let mut state = ScannerState::default();
    state.open_tool(ScannerMode::Photo);
    assert_eq!(state.back_target(), ScannerMode::Standby);

    state.link();
    state.open_tool(ScannerMode::Photo);
    assert_eq!(state.back_target(), ScannerMode::Standby);
}
