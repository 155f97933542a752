//! Line Items

use serde::Serialize;

use crate::pricing::line_total;

/// One distinct product held in a cart, with its aggregated quantity.
///
/// The name and unit price are captured when the product is first added and are never
/// re-synchronised with the catalogue afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineItem<K> {
    product: K,
    name: String,
    unit_price: u64,
    quantity: u32,
}

impl<K> LineItem<K> {
    /// Creates a new line item holding a single unit.
    pub(crate) fn new(product: K, name: String, unit_price: u64) -> Self {
        Self {
            product,
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Returns the product key.
    pub fn product(&self) -> &K {
        &self.product
    }

    /// Returns the display name captured at add time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price in minor units captured at add time.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Returns the quantity; always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `unit_price * quantity` in minor units.
    pub fn line_total(&self) -> u64 {
        line_total(self.unit_price, self.quantity)
    }

    /// Adds one unit, stopping at [`u32::MAX`].
    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrements the quantity, returning `false` when the line holds its last unit and must be
    /// removed instead.
    pub(crate) fn decrement(&mut self) -> bool {
        if self.quantity > 1 {
            self.quantity -= 1;

            true
        } else {
            false
        }
    }
}

#[cfg(test)]
impl<K> LineItem<K> {
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_holds_one_unit() {
        let item = LineItem::new("tee", "Tee".to_string(), 25_00);

        assert_eq!(item.quantity(), 1);
        assert_eq!(item.line_total(), 25_00);
    }

    #[test]
    fn decrement_refuses_to_reach_zero() {
        let mut item = LineItem::new("tee", "Tee".to_string(), 25_00);

        item.increment();

        assert!(item.decrement(), "two units should decrement to one");
        assert!(!item.decrement(), "the last unit must not decrement to zero");
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn increment_stops_at_the_cap() {
        let mut item = LineItem::new("tee", "Tee".to_string(), 25_00);

        item.set_quantity(u32::MAX);
        item.increment();

        assert_eq!(item.quantity(), u32::MAX);
    }
}
