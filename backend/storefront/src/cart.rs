//! # Cart
//!
//! Session-local selection of products and quantities.
//!
//! ## Invariants
//! - At most one line per product id
//! - Every stored line has quantity >= 1, a line that would drop to 0 is removed instead
//! - Lines keep insertion order
//! - Totals are summed from the lines on every call, nothing else is stored
//!
//! Name, price and image are copied from the product when its line is created.
//! Later catalog reloads do not touch existing lines.
use catalog::{PLACEHOLDER_IMAGE, Product};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: String,
    pub product_name: String,
    pub product_price: u32,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            product_name: product.product_name.clone(),
            product_price: product.product_price,
            image: product
                .image_ref()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.product_price).saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub items: u64,
    pub price: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add(&mut self, product: &Product) {
        match self.line_mut(&product.product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Absent ids are ignored.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Zero or negative removes the line. Never creates a line for an id not already in the cart.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn increment(&mut self, product_id: &str) {
        if let Some(quantity) = self.line(product_id).map(|line| i64::from(line.quantity)) {
            self.set_quantity(product_id, quantity + 1);
        }
    }

    pub fn decrement(&mut self, product_id: &str) {
        if let Some(quantity) = self.line(product_id).map(|line| i64::from(line.quantity)) {
            self.set_quantity(product_id, quantity - 1);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sums saturate at `u64::MAX`.
    pub fn totals(&self) -> Totals {
        self.lines.iter().fold(Totals::default(), |totals, line| Totals {
            items: totals.items.saturating_add(u64::from(line.quantity)),
            price: totals.price.saturating_add(line.line_total()),
        })
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
