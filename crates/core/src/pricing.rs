//! Pricing
//!
//! All amounts are held as integer minor units (pence/cents) so totals never drift; conversion to
//! [`Money`] only happens at the edge.

use rusty_money::{Money, iso::Currency};

/// Calculates the total of `quantity` units at `unit_price` minor units each.
///
/// Saturates at [`u64::MAX`] rather than wrapping.
pub fn line_total(unit_price: u64, quantity: u32) -> u64 {
    unit_price.saturating_mul(u64::from(quantity))
}

/// Wraps an amount of minor units in [`Money`] of the given currency.
///
/// Amounts beyond [`i64::MAX`] saturate.
pub fn to_money(minor_units: u64, currency: &Currency) -> Money<'_, Currency> {
    Money::from_minor(i64::try_from(minor_units).unwrap_or(i64::MAX), currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(line_total(40_00, 2), 80_00);
        assert_eq!(line_total(25_00, 1), 25_00);
    }

    #[test]
    fn line_total_saturates() {
        assert_eq!(line_total(u64::MAX, 2), u64::MAX);
    }

    #[test]
    fn to_money_uses_minor_units() {
        assert_eq!(to_money(105_00, iso::USD), Money::from_minor(105_00, iso::USD));
    }

    #[test]
    fn to_money_saturates_beyond_i64() {
        assert_eq!(to_money(u64::MAX, iso::GBP), Money::from_minor(i64::MAX, iso::GBP));
    }
}
