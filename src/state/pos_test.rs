use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn pos_state_default_lands_on_shift_start() {
    let state = PosState::default();
    assert_eq!(state.screen, PosScreen::ShiftStart);
    assert_eq!(state.shift, ShiftPhase::NotStarted);
    assert!(state.cashier.is_empty());
    assert_eq!(state.opening_cash, 0.0);
}

#[test]
fn pos_screen_default_is_shift_start() {
    assert_eq!(PosScreen::default(), PosScreen::ShiftStart);
}

#[test]
fn shift_phase_default_is_not_started() {
    assert_eq!(ShiftPhase::default(), ShiftPhase::NotStarted);
}

// =============================================================
// Shift machine
// =============================================================

#[test]
fn open_shift_requires_a_cashier() {
    let mut state = PosState::default();
    assert!(!state.open_shift("", "500"));
    assert!(!state.open_shift("   ", "500"));
    assert_eq!(state.shift, ShiftPhase::NotStarted);
}

#[test]
fn open_shift_requires_a_valid_amount() {
    let mut state = PosState::default();
    assert!(!state.open_shift("María García", ""));
    assert!(!state.open_shift("María García", "abc"));
    assert!(!state.open_shift("María García", "-50"));
    assert_eq!(state.shift, ShiftPhase::NotStarted);
    assert_eq!(state.screen, PosScreen::ShiftStart);
}

#[test]
fn open_shift_activates_and_navigates_to_sales() {
    let mut state = PosState::default();
    assert!(state.open_shift("María García", "500"));
    assert_eq!(state.shift, ShiftPhase::Active);
    assert_eq!(state.screen, PosScreen::Sales);
    assert_eq!(state.cashier, "María García");
    assert_eq!(state.opening_cash, 500.0);
}

#[test]
fn close_shift_returns_to_the_opening_form() {
    let mut state = PosState::default();
    state.open_shift("Juan Pérez", "750.50");
    state.select_screen(PosScreen::Cash);
    state.close_shift();
    assert_eq!(state.shift, ShiftPhase::NotStarted);
    assert_eq!(state.screen, PosScreen::ShiftStart);
    assert!(state.cashier.is_empty());
    assert_eq!(state.opening_cash, 0.0);
}

// =============================================================
// Routing
// =============================================================

#[test]
fn effective_screen_shows_the_opening_form_before_a_shift() {
    let state = PosState::default();
    assert_eq!(state.effective_screen(), PosScreen::ShiftStart);
}

#[test]
fn effective_screen_falls_back_to_sales_while_active() {
    let mut state = PosState::default();
    state.open_shift("Ana López", "500");
    state.screen = PosScreen::ShiftStart;
    assert_eq!(state.effective_screen(), PosScreen::Sales);
}

#[test]
fn effective_screen_passes_selected_screens_through() {
    let mut state = PosState::default();
    state.select_screen(PosScreen::Inventory);
    assert_eq!(state.effective_screen(), PosScreen::Inventory);
    state.open_shift("Ana López", "500");
    state.select_screen(PosScreen::Queries);
    assert_eq!(state.effective_screen(), PosScreen::Queries);
}

// =============================================================
// Sidebar gating
// =============================================================

#[test]
fn sales_and_cash_require_an_open_shift() {
    assert!(PosScreen::Sales.needs_shift());
    assert!(PosScreen::Cash.needs_shift());
    assert!(!PosScreen::Inventory.needs_shift());
    assert!(!PosScreen::Queries.needs_shift());
    assert!(!PosScreen::ShiftStart.needs_shift());
}
