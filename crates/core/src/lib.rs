//! Storefront
//!
//! Storefront is the pure domain core of the shop: the cart ledger that tracks which products a
//! shopper intends to buy, and the minor-unit pricing helpers used to total it.

pub mod ledger;
pub mod line_items;
pub mod prelude;
pub mod pricing;
