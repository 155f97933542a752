//! Test Helpers

use smallvec::SmallVec;
use testresult::TestResult;

use crate::{
    domain::{
        orders::{records::OrderUuid, status::OrderStatus},
        products::{
            ProductsService,
            data::{NewProduct, ProductDetails},
            records::{ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

/// Active product details with a list price and nothing else set.
pub(crate) fn product_details(name: &str, price: u64) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: None,
        price,
        sale_price: None,
        category_uuid: None,
        image_url: None,
        stock_quantity: 10,
        product_type: None,
        is_new: false,
        is_sale: false,
        sizes: SmallVec::new(),
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    details: ProductDetails,
) -> TestResult<ProductRecord> {
    let product = ctx
        .products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            details,
        })
        .await?;

    Ok(product)
}

/// Insert an order holding `quantity` units of one product.
///
/// Orders are placed by checkout, which the services do not cover, so they are written directly.
pub(crate) async fn insert_order(
    ctx: &TestContext,
    status: OrderStatus,
    product: &ProductRecord,
    quantity: i32,
) -> TestResult<OrderUuid> {
    let order = OrderUuid::new();
    let price = i64::try_from(product.price)?;

    sqlx::query(
        "INSERT INTO orders (uuid, total_amount, status, shipping_address) \
         VALUES ($1, $2, $3, '{\"city\": \"Leeds\"}')",
    )
    .bind(order.into_uuid())
    .bind(price * i64::from(quantity))
    .bind(status.as_str())
    .execute(ctx.db.pool())
    .await?;

    sqlx::query(
        "INSERT INTO order_items (uuid, order_uuid, product_uuid, quantity, size, price) \
         VALUES ($1, $2, $3, $4, 'M', $5)",
    )
    .bind(uuid::Uuid::now_v7())
    .bind(order.into_uuid())
    .bind(product.uuid.into_uuid())
    .bind(quantity)
    .bind(price)
    .execute(ctx.db.pool())
    .await?;

    Ok(order)
}
