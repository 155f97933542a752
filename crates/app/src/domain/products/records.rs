//! Product Records

use jiff::Timestamp;
use smallvec::SmallVec;

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub category_uuid: Option<CategoryUuid>,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub stock_quantity: u32,
    pub product_type: String,
    pub is_new: bool,
    pub is_sale: bool,
    pub is_active: bool,
    pub sizes: SmallVec<[String; 5]>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// The price a shopper pays right now, in minor units.
    ///
    /// This is the sale price when the product is flagged as on sale and has one, otherwise the
    /// list price.
    pub fn effective_price(&self) -> u64 {
        match self.sale_price {
            Some(sale_price) if self.is_sale => sale_price,
            _ => self.price,
        }
    }
}
