//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    ledger::CartLedger,
    line_items::LineItem,
    pricing::{line_total, to_money},
};
