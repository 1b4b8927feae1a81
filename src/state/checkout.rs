//! Checkout form state: payment method, mixed payments, and change math.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::util::money::parse_amount;

/// Payment methods offered by the checkout dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
        }
    }
}

/// Checkout dialog form. Amounts stay as the raw strings typed into the
/// inputs; parsing degrades to zero exactly like the calculator it
/// models.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutForm {
    pub method: PaymentMethod,
    /// Cash + card split. Selecting any single method turns this off.
    pub mixed: bool,
    pub cash_received: String,
    pub card_amount: String,
    pub print_ticket: bool,
    pub send_whatsapp: bool,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            method: PaymentMethod::Cash,
            mixed: false,
            cash_received: String::new(),
            card_amount: String::new(),
            print_ticket: true,
            send_whatsapp: false,
        }
    }
}

impl CheckoutForm {
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = method;
        self.mixed = false;
    }

    pub fn set_mixed(&mut self, mixed: bool) {
        self.mixed = mixed;
    }

    /// Whether the cash inputs are relevant for the current selection.
    pub fn wants_cash(&self) -> bool {
        self.mixed || self.method == PaymentMethod::Cash
    }

    fn cash_value(&self) -> f64 {
        parse_amount(&self.cash_received).unwrap_or(0.0)
    }

    fn card_value(&self) -> f64 {
        parse_amount(&self.card_amount).unwrap_or(0.0)
    }

    /// Raw change for the given total. Mixed payments only need cash for
    /// what the card does not cover.
    pub fn change(&self, total: f64) -> f64 {
        if self.mixed {
            self.cash_value() - (total - self.card_value())
        } else {
            self.cash_value() - total
        }
    }

    /// Non-negative change shown by the calculator.
    pub fn change_due(&self, total: f64) -> f64 {
        self.change(total).max(0.0)
    }

    /// Amount still missing when the tendered funds fall short.
    pub fn shortfall(&self, total: f64) -> Option<f64> {
        let change = self.change(total);
        if change < 0.0 { Some(-change) } else { None }
    }

    /// Whether the sale can be completed for the given total. Card and
    /// transfer have no numeric guard; the terminal or the bank app is
    /// assumed to collect the exact total.
    pub fn can_complete(&self, total: f64) -> bool {
        if self.mixed {
            self.cash_value() + self.card_value() >= total
        } else {
            match self.method {
                PaymentMethod::Cash => self.cash_value() >= total,
                PaymentMethod::Card | PaymentMethod::Transfer => true,
            }
        }
    }
}
