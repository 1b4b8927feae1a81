//! POS register state: screen selection and the shift machine.
//!
//! DESIGN
//! ======
//! The register keeps one current-screen value and one shift phase. The
//! sales and cash screens only make sense inside a shift, so the sidebar
//! disables them while no shift is open and the close-shift action drops
//! the layout back onto the opening form.

#[cfg(test)]
#[path = "pos_test.rs"]
mod pos_test;

use crate::util::money::parse_amount;

/// Screens reachable from the POS sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PosScreen {
    /// Shift-opening form, the register's landing screen.
    #[default]
    ShiftStart,
    Sales,
    Inventory,
    Cash,
    Queries,
}

impl PosScreen {
    /// Items that require an open shift before they can be selected.
    pub fn needs_shift(self) -> bool {
        matches!(self, PosScreen::Sales | PosScreen::Cash)
    }
}

/// Whether a cashier shift is currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShiftPhase {
    #[default]
    NotStarted,
    Active,
}

/// Register state held by the POS layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PosState {
    pub screen: PosScreen,
    pub shift: ShiftPhase,
    /// Cashier who opened the current shift, empty while none is open.
    pub cashier: String,
    /// Opening cash declared when the shift opened.
    pub opening_cash: f64,
}

impl PosState {
    /// Open a shift and jump to the sales screen. The transition is
    /// rejected unless a cashier is selected and the opening amount
    /// parses as a valid amount.
    pub fn open_shift(&mut self, cashier: &str, opening_cash: &str) -> bool {
        if cashier.trim().is_empty() {
            return false;
        }
        let Ok(amount) = parse_amount(opening_cash) else {
            return false;
        };
        self.cashier = cashier.trim().to_owned();
        self.opening_cash = amount;
        self.shift = ShiftPhase::Active;
        self.screen = PosScreen::Sales;
        true
    }

    /// Close the shift and land back on the opening form. The sales
    /// screen unmounts, which discards any in-progress cart.
    pub fn close_shift(&mut self) {
        self.shift = ShiftPhase::NotStarted;
        self.cashier.clear();
        self.opening_cash = 0.0;
        self.screen = PosScreen::ShiftStart;
    }

    pub fn select_screen(&mut self, screen: PosScreen) {
        self.screen = screen;
    }

    /// Screen the router actually renders. The shift-start id while a
    /// shift is active falls through to sales, so an open register never
    /// shows the opening form again.
    pub fn effective_screen(&self) -> PosScreen {
        match (self.shift, self.screen) {
            (ShiftPhase::Active, PosScreen::ShiftStart) => PosScreen::Sales,
            (_, screen) => screen,
        }
    }
}
