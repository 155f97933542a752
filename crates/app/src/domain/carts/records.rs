//! Cart Records

use rusty_money::{Money, iso::Currency};
use storefront::{ledger::CartLedger, line_items::LineItem};

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Point-in-time view of a cart's ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub currency: &'static Currency,
    pub items: Vec<CartItemRecord>,
    pub item_count: u64,
    pub total: u64,
}

impl CartRecord {
    pub(crate) fn snapshot(uuid: CartUuid, ledger: &CartLedger<ProductUuid>) -> Self {
        Self {
            uuid,
            currency: ledger.currency(),
            items: ledger.iter().map(CartItemRecord::from).collect(),
            item_count: ledger.item_count(),
            total: ledger.total_minor_units(),
        }
    }

    /// Total as money in the cart's own currency.
    pub fn total_price(&self) -> Money<'static, Currency> {
        storefront::pricing::to_money(self.total, self.currency)
    }
}

/// Cart Item Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemRecord {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub line_total: u64,
}

impl From<&LineItem<ProductUuid>> for CartItemRecord {
    fn from(item: &LineItem<ProductUuid>) -> Self {
        Self {
            product_uuid: *item.product(),
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            line_total: item.line_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};

    use super::*;

    #[test]
    fn total_price_is_in_the_ledger_currency() {
        let mut ledger = CartLedger::new(GBP);

        ledger.add_unit(ProductUuid::new(), "Logo Tee", 12_50);
        ledger.add_unit(ProductUuid::new(), "Cap", 7_50);

        let cart = CartRecord::snapshot(CartUuid::new(), &ledger);

        assert_eq!(cart.currency, GBP);
        assert_eq!(cart.total_price(), Money::from_minor(20_00, GBP));
        assert_ne!(cart.total_price(), Money::from_minor(20_00, USD));
    }
}
