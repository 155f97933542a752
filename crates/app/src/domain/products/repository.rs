//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use smallvec::SmallVec;
use sqlx::{
    FromRow, Postgres, Row, Transaction,
    postgres::{PgArguments, PgRow},
    query,
    query::QueryAs,
    query_as,
};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{ProductDetails, ProductFilter},
            records::{ProductRecord, ProductUuid},
        },
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SET_PRODUCT_ACTIVE_SQL: &str = include_str!("sql/set_product_active.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

type ProductQuery<'q> = QueryAs<'q, Postgres, ProductRecord, PgArguments>;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.active_only)
            .bind(filter.product_type)
            .bind(filter.on_sale)
            .bind(filter.new_only)
            .bind(filter.limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        slug: String,
        details: ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        let query = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL).bind(product.into_uuid());

        bind_details(query, slug, details)?
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        slug: String,
        details: ProductDetails,
    ) -> Result<ProductRecord, sqlx::Error> {
        let query = query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL).bind(product.into_uuid());

        bind_details(query, slug, details)?
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_product_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        is_active: bool,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_PRODUCT_ACTIVE_SQL)
            .bind(product.into_uuid())
            .bind(is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Bind the editable columns (`$2..=$13`) shared by the insert and update statements.
fn bind_details(
    query: ProductQuery<'_>,
    slug: String,
    details: ProductDetails,
) -> Result<ProductQuery<'_>, sqlx::Error> {
    let price = amount_to_i64(details.price, "price")?;

    let sale_price = details
        .sale_price
        .map(|sale_price| amount_to_i64(sale_price, "sale_price"))
        .transpose()?;

    let stock_quantity =
        i32::try_from(details.stock_quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock_quantity".to_string(),
            source: Box::new(e),
        })?;

    let product_type = details.product_type_or_default().to_string();

    Ok(query
        .bind(details.name)
        .bind(slug)
        .bind(details.description)
        .bind(price)
        .bind(sale_price)
        .bind(details.category_uuid.map(CategoryUuid::into_uuid))
        .bind(details.image_url)
        .bind(stock_quantity)
        .bind(product_type)
        .bind(details.is_new)
        .bind(details.is_sale)
        .bind(details.sizes.into_vec()))
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let sale_price = row
            .try_get::<Option<i64>, _>("sale_price")?
            .map(u64::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "sale_price".to_string(),
                source: Box::new(e),
            })?;

        let stock_quantity = u32::try_from(row.try_get::<i32, _>("stock_quantity")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "stock_quantity".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            sale_price,
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            category_name: row.try_get("category_name")?,
            image_url: row.try_get("image_url")?,
            stock_quantity,
            product_type: row.try_get("product_type")?,
            is_new: row.try_get("is_new")?,
            is_sale: row.try_get("is_sale")?,
            is_active: row.try_get("is_active")?,
            sizes: SmallVec::from_vec(row.try_get::<Vec<String>, _>("sizes")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
