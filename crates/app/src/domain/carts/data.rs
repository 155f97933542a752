//! Cart Data

use jiff::SignedDuration;

use crate::domain::carts::records::CartUuid;

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub uuid: CartUuid,
}

/// Bounds on the carts held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLimits {
    /// Carts left untouched for this long are discarded.
    pub idle_ttl: SignedDuration,

    /// Most carts held at once.
    pub max_carts: usize,
}

impl Default for CartLimits {
    fn default() -> Self {
        Self {
            idle_ttl: SignedDuration::from_hours(24),
            max_carts: 100_000,
        }
    }
}
