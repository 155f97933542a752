//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{data::ProductDetails, records::ProductRecord};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    /// URL slug derived from the name
    pub slug: String,

    pub description: Option<String>,

    /// List price in minor units
    pub price: u64,

    /// Sale price in minor units, if any
    pub sale_price: Option<u64>,

    /// Price a shopper pays today in minor units
    pub effective_price: u64,

    pub category_uuid: Option<Uuid>,

    pub category_name: Option<String>,

    pub image_url: Option<String>,

    pub stock_quantity: u32,

    pub product_type: String,

    pub is_new: bool,

    pub is_sale: bool,

    /// Whether the product is shown on the storefront
    pub is_active: bool,

    pub sizes: Vec<String>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            effective_price: product.effective_price(),
            uuid: product.uuid.into(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            sale_price: product.sale_price,
            category_uuid: product.category_uuid.map(Into::into),
            category_name: product.category_name,
            image_url: product.image_url,
            stock_quantity: product.stock_quantity,
            product_type: product.product_type,
            is_new: product.is_new,
            is_sale: product.is_sale,
            is_active: product.is_active,
            sizes: product.sizes.into_vec(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Editable product fields
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsRequest {
    pub name: String,

    pub description: Option<String>,

    /// List price in minor units
    pub price: u64,

    pub sale_price: Option<u64>,

    pub category_uuid: Option<Uuid>,

    pub image_url: Option<String>,

    #[serde(default)]
    pub stock_quantity: u32,

    /// Defaults to `general`
    pub product_type: Option<String>,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub is_sale: bool,

    /// Available sizes; blank entries are dropped
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl From<ProductDetailsRequest> for ProductDetails {
    fn from(request: ProductDetailsRequest) -> Self {
        ProductDetails {
            name: request.name,
            description: request.description,
            price: request.price,
            sale_price: request.sale_price,
            category_uuid: request.category_uuid.map(Into::into),
            image_url: request.image_url,
            stock_quantity: request.stock_quantity,
            product_type: request.product_type,
            is_new: request.is_new,
            is_sale: request.is_sale,
            sizes: request.sizes.into_iter().collect(),
        }
    }
}
