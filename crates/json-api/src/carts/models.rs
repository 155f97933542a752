//! Cart response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::records::{CartItemRecord, CartRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub product_uuid: Uuid,

    /// Product name captured when first added
    pub name: String,

    /// Unit price captured when first added, in minor units
    pub unit_price: u64,

    pub quantity: u32,

    /// `unit_price * quantity` in minor units
    pub line_total: u64,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        CartItemResponse {
            product_uuid: item.product_uuid.into(),
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub uuid: Uuid,

    /// ISO 4217 currency code
    pub currency: String,

    /// Line items in the order they were first added
    pub items: Vec<CartItemResponse>,

    /// Total units across every line item
    pub item_count: u64,

    /// Cart total in minor units
    pub total: u64,

    /// Cart total formatted for display, e.g. `$105.00`
    pub total_display: String,
}

impl CartResponse {
    pub(crate) fn new(cart: CartRecord) -> Self {
        CartResponse {
            total_display: cart.total_price().to_string(),
            uuid: cart.uuid.into(),
            currency: cart.currency.iso_alpha_code.to_string(),
            items: cart.items.into_iter().map(Into::into).collect(),
            item_count: cart.item_count,
            total: cart.total,
        }
    }
}
