//! The in-progress sale cart and its derived totals.
//!
//! DESIGN
//! ======
//! The cart lives in a signal local to the sales screen, so navigating
//! away (or closing the shift) unmounts it and the sale is simply gone.
//! Lines are keyed by product id plus variant label: the same boot in two
//! sizes is two lines, the same size twice is one line with quantity 2.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::state::catalog::Product;

/// IVA applied to every sale.
pub const TAX_RATE: f64 = 0.16;

/// One line in the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub variant: Option<String>,
    pub sku: Option<String>,
}

impl CartItem {
    pub fn line_subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Whether the sale closes immediately or opens a layaway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaleType {
    #[default]
    Normal,
    Layaway,
}

impl SaleType {
    pub fn label(self) -> &'static str {
        match self {
            SaleType::Normal => "Venta Normal",
            SaleType::Layaway => "Apartado/Layaway",
        }
    }
}

/// Totals snapshot handed to the checkout dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// The in-progress sale.
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    /// Global discount percentage, clamped to 0..=100.
    pub discount_percent: f64,
    pub customer: String,
    pub sale_type: SaleType,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            discount_percent: 0.0,
            customer: "Cliente General".to_owned(),
            sale_type: SaleType::Normal,
        }
    }
}

impl Cart {
    /// Add one unit of a product. A line matching (product id, variant)
    /// gains quantity; otherwise a new line starts at quantity 1.
    pub fn add(&mut self, product: &Product, variant: Option<String>) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id && item.variant == variant)
        {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            variant,
            sku: Some(product.sku.clone()),
        });
    }

    /// Step a line's quantity with the +/- controls; stepping down from
    /// one removes the line.
    pub fn step_quantity(&mut self, product_id: &str, variant: Option<&str>, up: bool) {
        let Some(index) = self.items.iter().position(|item| {
            item.product_id == product_id && item.variant.as_deref() == variant
        }) else {
            return;
        };
        if up {
            self.items[index].quantity += 1;
        } else if self.items[index].quantity <= 1 {
            self.items.remove(index);
        } else {
            self.items[index].quantity -= 1;
        }
    }

    /// Set a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, product_id: &str, variant: Option<&str>, quantity: i32) {
        match u32::try_from(quantity) {
            Ok(quantity) if quantity > 0 => {
                if let Some(item) = self.items.iter_mut().find(|item| {
                    item.product_id == product_id && item.variant.as_deref() == variant
                }) {
                    item.quantity = quantity;
                }
            }
            _ => self.remove(product_id, variant),
        }
    }

    pub fn remove(&mut self, product_id: &str, variant: Option<&str>) {
        self.items
            .retain(|item| !(item.product_id == product_id && item.variant.as_deref() == variant));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_discount(&mut self, percent: f64) {
        self.discount_percent = percent.clamp(0.0, 100.0);
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_subtotal).sum()
    }

    pub fn discount_amount(&self) -> f64 {
        self.subtotal() * (self.discount_percent / 100.0)
    }

    /// IVA is charged on the discounted base, not the raw subtotal.
    pub fn tax_amount(&self) -> f64 {
        (self.subtotal() - self.discount_amount()) * TAX_RATE
    }

    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount_amount() + self.tax_amount()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            discount_amount: self.discount_amount(),
            tax_amount: self.tax_amount(),
            total: self.total(),
        }
    }
}
