//! Cart Ledger

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{line_items::LineItem, pricing::to_money};

/// An insertion-ordered collection of line items keyed by product.
///
/// Each product key is either absent or present with a quantity of at least one. Adding a unit
/// moves `absent -> present(1)` or `present(n) -> present(n + 1)`; removing a unit moves
/// `present(1) -> absent` or `present(n) -> present(n - 1)`. No operation can fail.
#[derive(Debug, Clone)]
pub struct CartLedger<K> {
    items: SmallVec<[LineItem<K>; 8]>,
    currency: &'static Currency,
}

impl<K: PartialEq> CartLedger<K> {
    /// Create an empty ledger priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: SmallVec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// When the product is already present its quantity is incremented and the name and unit
    /// price captured on first add are kept; the values passed here are ignored.
    ///
    /// A line item holds at most [`u32::MAX`] units. Adding to a line already at that cap leaves
    /// the ledger unchanged, so the item count grows by one on every add below the cap.
    pub fn add_unit(&mut self, product: K, name: impl Into<String>, unit_price: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| *item.product() == product) {
            item.increment();

            return;
        }

        self.items.push(LineItem::new(product, name.into(), unit_price));
    }

    /// Remove one unit of a product, returning the number of units actually removed.
    ///
    /// Removing a product that is not in the ledger is a no-op and returns `0`. Removing the last
    /// unit of a product deletes its line item.
    pub fn remove_unit(&mut self, product: &K) -> u32 {
        let Some(item) = self.items.iter_mut().find(|item| item.product() == product) else {
            return 0;
        };

        if !item.decrement() {
            self.items.retain(|item| item.product() != product);
        }

        1
    }

    /// Get the line item for a product.
    pub fn get(&self, product: &K) -> Option<&LineItem<K>> {
        self.items.iter().find(|item| item.product() == product)
    }

    /// Quantity held for a product, `0` when absent.
    pub fn quantity_of(&self, product: &K) -> u32 {
        self.get(product).map_or(0, LineItem::quantity)
    }

    /// Check whether a product is in the ledger.
    pub fn contains(&self, product: &K) -> bool {
        self.get(product).is_some()
    }
}

impl<K> CartLedger<K> {
    /// Sum of every line item's quantity; drives the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of `unit_price * quantity` over every line item, in minor units.
    pub fn total_minor_units(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(item.line_total()))
    }

    /// Total price of the ledger in its currency.
    pub fn total_price(&self) -> Money<'static, Currency> {
        to_money(self.total_minor_units(), self.currency)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem<K>] {
        &self.items
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<K>> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the ledger holds no products.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency the ledger is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, K> IntoIterator for &'a CartLedger<K> {
    type Item = &'a LineItem<K>;
    type IntoIter = std::slice::Iter<'a, LineItem<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn ledger() -> CartLedger<&'static str> {
        CartLedger::new(iso::USD)
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = ledger();

        assert!(ledger.is_empty());
        assert_eq!(ledger.item_count(), 0);
        assert_eq!(ledger.total_price(), Money::from_minor(0, iso::USD));
        assert_eq!(ledger.currency(), iso::USD);
    }

    #[test]
    fn adding_same_product_twice_aggregates_quantity() {
        let mut ledger = ledger();

        ledger.add_unit("p", "X", 10_00);
        ledger.add_unit("p", "X", 10_00);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.quantity_of(&"p"), 2);
        assert_eq!(ledger.item_count(), 2);
    }

    #[test]
    fn first_captured_name_and_price_win() {
        let mut ledger = ledger();

        ledger.add_unit("p", "Original", 10_00);
        ledger.add_unit("p", "Renamed", 99_00);

        let item = ledger.get(&"p");

        assert_eq!(item.map(LineItem::name), Some("Original"));
        assert_eq!(item.map(LineItem::unit_price), Some(10_00));
        assert_eq!(ledger.total_minor_units(), 20_00);
    }

    #[test]
    fn remove_unit_on_empty_ledger_is_noop() {
        let mut ledger = ledger();

        assert_eq!(ledger.remove_unit(&"missing"), 0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.item_count(), 0);
    }

    #[test]
    fn remove_unit_for_unknown_product_leaves_others_alone() {
        let mut ledger = ledger();

        ledger.add_unit("a", "A", 25_00);

        assert_eq!(ledger.remove_unit(&"b"), 0);
        assert_eq!(ledger.item_count(), 1);
        assert_eq!(ledger.quantity_of(&"a"), 1);
    }

    #[test]
    fn removing_last_unit_deletes_line_item() {
        let mut ledger = ledger();

        ledger.add_unit("a", "A", 25_00);

        assert_eq!(ledger.remove_unit(&"a"), 1);
        assert!(!ledger.contains(&"a"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut ledger = ledger();

        ledger.add_unit("b", "B", 40_00);
        ledger.add_unit("a", "A", 25_00);
        ledger.add_unit("b", "B", 40_00);

        let order: Vec<_> = ledger.iter().map(|item| *item.product()).collect();

        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn adding_at_the_quantity_cap_changes_nothing() {
        let mut ledger = ledger();

        ledger.add_unit("a", "A", 1);

        if let Some(item) = ledger.items.first_mut() {
            item.set_quantity(u32::MAX);
        }

        ledger.add_unit("a", "A", 1);

        assert_eq!(ledger.quantity_of(&"a"), u32::MAX);
        assert_eq!(ledger.item_count(), u64::from(u32::MAX));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut ledger = ledger();

        ledger.add_unit("a", "A", 25_00);
        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.total_minor_units(), 0);
    }
}
