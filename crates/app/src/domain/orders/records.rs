//! Order Records

use jiff::Timestamp;
use serde_json::Value;

use crate::{
    auth::models::UserUuid,
    domain::{orders::status::OrderStatus, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Record
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: Option<UserUuid>,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub shipping_address: Value,
    pub created_at: Timestamp,
    pub items: Vec<OrderItemRecord>,
}

/// One purchased product within an order, priced at checkout.
#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub quantity: u32,
    pub size: Option<String>,
    pub price: u64,
}
