//! Admin Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use storefront_app::domain::products::data::ProductFilter;

use crate::{extensions::*, products::models::ProductsResponse, state::State};

/// Admin Product Index Handler
///
/// Lists every product, including hidden ones, newest first.
#[endpoint(
    tags("admin"),
    summary = "List All Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products(ProductFilter::default())
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError,
        records::{ProductRecord, ProductUuid},
    };

    use crate::test_helpers::{TestServices, admin_identity, make_product};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        TestServices {
            products,
            ..TestServices::default()
        }
        .service_as(admin_identity(), Router::with_path("admin/products").get(handler))
    }

    #[tokio::test]
    async fn test_admin_index_includes_inactive_products() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| *filter == ProductFilter::default())
            .return_once(move |_| {
                Ok(vec![ProductRecord {
                    is_active: false,
                    ..make_product(uuid)
                }])
            });

        let response: ProductsResponse = TestClient::get("http://example.com/admin/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(
            response.products.first().map(|product| product.is_active),
            Some(false)
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_index_failure_returns_500() {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        let res = TestClient::get("http://example.com/admin/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
