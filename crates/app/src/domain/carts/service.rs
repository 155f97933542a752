//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use storefront::ledger::CartLedger;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{
    carts::{
        data::{CartLimits, NewCart},
        errors::CartsServiceError,
        records::{CartRecord, CartUuid},
    },
    products::{ProductsService, records::ProductUuid},
};

type Carts = FxHashMap<CartUuid, CartEntry>;

/// A cart's ledger and the last time anyone used it.
#[derive(Debug)]
struct CartEntry {
    ledger: CartLedger<ProductUuid>,
    touched_at: Timestamp,
}

impl CartEntry {
    fn is_idle(&self, now: Timestamp, idle_ttl: SignedDuration) -> bool {
        now.duration_since(self.touched_at) >= idle_ttl
    }
}

/// Carts held in process memory, one ledger per cart.
///
/// Every ledger mutation happens under the map's write lock, so operations on a cart are applied
/// one at a time. Product lookups complete before the lock is taken. Carts left idle for
/// [`CartLimits::idle_ttl`] or longer are treated as gone and are swept whenever a cart is created.
pub struct InMemoryCartsService {
    products: Arc<dyn ProductsService>,
    currency: &'static Currency,
    limits: CartLimits,
    carts: RwLock<Carts>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        currency: &'static Currency,
        limits: CartLimits,
    ) -> Self {
        Self {
            products,
            currency,
            limits,
            carts: RwLock::new(Carts::default()),
        }
    }

    async fn ensure_exists(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let now = Timestamp::now();

        match self.carts.read().await.get(&cart) {
            Some(entry) if !entry.is_idle(now, self.limits.idle_ttl) => Ok(()),
            _ => Err(CartsServiceError::NotFound),
        }
    }

    /// Look up a live cart and mark it as used, dropping it instead when it has gone idle.
    fn touch<'a>(
        &self,
        carts: &'a mut Carts,
        cart: CartUuid,
    ) -> Result<&'a mut CartEntry, CartsServiceError> {
        let now = Timestamp::now();

        if carts
            .get(&cart)
            .is_some_and(|entry| entry.is_idle(now, self.limits.idle_ttl))
        {
            carts.remove(&cart);

            debug!(cart = %cart, "dropped idle cart");
        }

        let entry = carts.get_mut(&cart).ok_or(CartsServiceError::NotFound)?;

        entry.touched_at = now;

        Ok(entry)
    }

    fn sweep(&self, carts: &mut Carts, now: Timestamp) {
        let before = carts.len();

        carts.retain(|_, entry| !entry.is_idle(now, self.limits.idle_ttl));

        let evicted = before - carts.len();

        if evicted > 0 {
            debug!(evicted, remaining = carts.len(), "evicted idle carts");
        }
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError> {
        let now = Timestamp::now();
        let mut carts = self.carts.write().await;

        self.sweep(&mut carts, now);

        if carts.contains_key(&cart.uuid) {
            return Err(CartsServiceError::AlreadyExists);
        }

        if carts.len() >= self.limits.max_carts {
            warn!(max_carts = self.limits.max_carts, "refusing cart, limit reached");

            return Err(CartsServiceError::TooManyCarts);
        }

        let entry = carts.entry(cart.uuid).or_insert_with(|| CartEntry {
            ledger: CartLedger::new(self.currency),
            touched_at: now,
        });

        debug!(cart = %cart.uuid, "created cart");

        Ok(CartRecord::snapshot(cart.uuid, &entry.ledger))
    }

    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError> {
        let mut carts = self.carts.write().await;

        let entry = self.touch(&mut carts, cart)?;

        Ok(CartRecord::snapshot(cart, &entry.ledger))
    }

    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError> {
        let now = Timestamp::now();

        match self.carts.write().await.remove(&cart) {
            Some(entry) if !entry.is_idle(now, self.limits.idle_ttl) => Ok(()),
            _ => Err(CartsServiceError::NotFound),
        }
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self),
        fields(cart = %cart, product = %product),
        err
    )]
    async fn add_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        self.ensure_exists(cart).await?;

        let record = self.products.get_product(product).await?;

        if !record.is_active {
            return Err(CartsServiceError::Unavailable);
        }

        let unit_price = record.effective_price();

        let mut carts = self.carts.write().await;

        let entry = self.touch(&mut carts, cart)?;

        entry.ledger.add_unit(product, record.name, unit_price);

        Ok(CartRecord::snapshot(cart, &entry.ledger))
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self),
        fields(cart = %cart, product = %product),
        err
    )]
    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut carts = self.carts.write().await;

        let entry = self.touch(&mut carts, cart)?;

        let removed = entry.ledger.remove_unit(&product);

        debug!(removed, "removed cart item");

        Ok(CartRecord::snapshot(cart, &entry.ledger))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates an empty cart.
    async fn create_cart(&self, cart: NewCart) -> Result<CartRecord, CartsServiceError>;

    /// Retrieve a snapshot of a cart.
    async fn get_cart(&self, cart: CartUuid) -> Result<CartRecord, CartsServiceError>;

    /// Deletes a cart and everything in it.
    async fn delete_cart(&self, cart: CartUuid) -> Result<(), CartsServiceError>;

    /// Adds one unit of an active product, capturing its current name and effective price the
    /// first time it enters the cart.
    async fn add_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Removes one unit of a product. Removing a product the cart does not hold changes nothing.
    async fn remove_item(
        &self,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<CartRecord, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use mockall::predicate::eq;
    use rusty_money::iso::USD;
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::domain::products::{MockProductsService, ProductsServiceError, records::ProductRecord};

    use super::*;

    fn product(uuid: ProductUuid, name: &str, price: u64) -> ProductRecord {
        ProductRecord {
            uuid,
            name: name.to_string(),
            slug: crate::slugs::slugify(name),
            description: None,
            price,
            sale_price: None,
            category_uuid: None,
            category_name: None,
            image_url: None,
            stock_quantity: 5,
            product_type: "general".to_string(),
            is_new: false,
            is_sale: false,
            is_active: true,
            sizes: smallvec![],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn service(products: MockProductsService) -> InMemoryCartsService {
        InMemoryCartsService::new(Arc::new(products), USD, CartLimits::default())
    }

    fn service_with_limits(limits: CartLimits) -> InMemoryCartsService {
        InMemoryCartsService::new(Arc::new(MockProductsService::new()), USD, limits)
    }

    fn expire_immediately() -> CartLimits {
        CartLimits {
            idle_ttl: SignedDuration::ZERO,
            ..CartLimits::default()
        }
    }

    async fn service_with_cart(products: MockProductsService) -> TestResult<(InMemoryCartsService, CartUuid)> {
        let service = service(products);
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;

        Ok((service, cart))
    }

    #[tokio::test]
    async fn create_cart_starts_empty() -> TestResult {
        let service = service(MockProductsService::new());
        let uuid = CartUuid::new();

        let cart = service.create_cart(NewCart { uuid }).await?;

        assert_eq!(cart.uuid, uuid);
        assert!(cart.items.is_empty());
        assert_eq!(cart.item_count, 0);
        assert_eq!(cart.total, 0);
        assert_eq!(cart.currency, USD);

        Ok(())
    }

    #[tokio::test]
    async fn create_cart_twice_is_rejected() -> TestResult {
        let (service, cart) = service_with_cart(MockProductsService::new()).await?;

        let result = service.create_cart(NewCart { uuid: cart }).await;

        assert!(matches!(result, Err(CartsServiceError::AlreadyExists)));

        Ok(())
    }

    #[tokio::test]
    async fn adding_products_aggregates_quantities_and_totals() -> TestResult {
        let tee = ProductUuid::new();
        let pants = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .with(eq(tee))
            .times(1)
            .returning(move |_| Ok(product(tee, "Logo Tee", 25_00)));

        products
            .expect_get_product()
            .with(eq(pants))
            .times(2)
            .returning(move |_| Ok(product(pants, "Cargo Pants", 40_00)));

        let (service, cart) = service_with_cart(products).await?;

        service.add_item(cart, tee).await?;
        service.add_item(cart, pants).await?;

        let snapshot = service.add_item(cart, pants).await?;

        assert_eq!(snapshot.total, 105_00);
        assert_eq!(snapshot.item_count, 3);
        assert_eq!(snapshot.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn adding_sale_product_captures_sale_price() -> TestResult {
        let tee = ProductUuid::new();

        let mut products = MockProductsService::new();

        products.expect_get_product().with(eq(tee)).return_once(move |_| {
            Ok(ProductRecord {
                sale_price: Some(18_00),
                is_sale: true,
                ..product(tee, "Logo Tee", 25_00)
            })
        });

        let (service, cart) = service_with_cart(products).await?;

        let snapshot = service.add_item(cart, tee).await?;

        assert_eq!(snapshot.items.first().map(|item| item.unit_price), Some(18_00));
        assert_eq!(snapshot.total, 18_00);

        Ok(())
    }

    #[tokio::test]
    async fn adding_inactive_product_is_rejected() -> TestResult {
        let tee = ProductUuid::new();

        let mut products = MockProductsService::new();

        products.expect_get_product().return_once(move |_| {
            Ok(ProductRecord {
                is_active: false,
                ..product(tee, "Logo Tee", 25_00)
            })
        });

        let (service, cart) = service_with_cart(products).await?;

        let result = service.add_item(cart, tee).await;

        assert!(matches!(result, Err(CartsServiceError::Unavailable)));
        assert_eq!(service.get_cart(cart).await?.item_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_product_is_not_found() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let (service, cart) = service_with_cart(products).await?;

        let result = service.add_item(cart, ProductUuid::new()).await;

        assert!(matches!(result, Err(CartsServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn adding_to_unknown_cart_skips_product_lookup() {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();

        let result = service(products)
            .add_item(CartUuid::new(), ProductUuid::new())
            .await;

        assert!(matches!(result, Err(CartsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn removing_last_unit_removes_line_item() -> TestResult {
        let tee = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .returning(move |_| Ok(product(tee, "Logo Tee", 25_00)));

        let (service, cart) = service_with_cart(products).await?;

        service.add_item(cart, tee).await?;
        service.add_item(cart, tee).await?;

        let snapshot = service.remove_item(cart, tee).await?;

        assert_eq!(snapshot.item_count, 1);
        assert_eq!(snapshot.total, 25_00);

        let snapshot = service.remove_item(cart, tee).await?;

        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn removing_absent_product_leaves_cart_unchanged() -> TestResult {
        let tee = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .return_once(move |_| Ok(product(tee, "Logo Tee", 25_00)));

        let (service, cart) = service_with_cart(products).await?;

        let before = service.add_item(cart, tee).await?;
        let after = service.remove_item(cart, ProductUuid::new()).await?;

        assert_eq!(before, after);

        Ok(())
    }

    #[tokio::test]
    async fn removing_from_unknown_cart_is_not_found() {
        let result = service(MockProductsService::new())
            .remove_item(CartUuid::new(), ProductUuid::new())
            .await;

        assert!(matches!(result, Err(CartsServiceError::NotFound)));
    }

    #[tokio::test]
    async fn deleted_cart_is_gone() -> TestResult {
        let (service, cart) = service_with_cart(MockProductsService::new()).await?;

        service.delete_cart(cart).await?;

        assert!(matches!(service.get_cart(cart).await, Err(CartsServiceError::NotFound)));
        assert!(matches!(service.delete_cart(cart).await, Err(CartsServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn idle_cart_is_not_found() -> TestResult {
        let service = service_with_limits(expire_immediately());
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;

        assert!(matches!(service.get_cart(cart).await, Err(CartsServiceError::NotFound)));
        assert!(matches!(
            service.remove_item(cart, ProductUuid::new()).await,
            Err(CartsServiceError::NotFound)
        ));
        assert!(service.carts.read().await.is_empty(), "idle cart should be dropped on access");

        Ok(())
    }

    #[tokio::test]
    async fn adding_to_idle_cart_skips_product_lookup() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();

        let service = InMemoryCartsService::new(Arc::new(products), USD, expire_immediately());
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;

        let result = service.add_item(cart, ProductUuid::new()).await;

        assert!(matches!(result, Err(CartsServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn creating_a_cart_sweeps_idle_carts() -> TestResult {
        let service = service_with_limits(expire_immediately());

        for _ in 0..3 {
            service.create_cart(NewCart { uuid: CartUuid::new() }).await?;
        }

        assert_eq!(service.carts.read().await.len(), 1, "only the newest cart should remain");

        Ok(())
    }

    #[tokio::test]
    async fn deleting_idle_cart_is_not_found() -> TestResult {
        let service = service_with_limits(expire_immediately());
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;

        assert!(matches!(service.delete_cart(cart).await, Err(CartsServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn recreating_an_idle_cart_starts_fresh() -> TestResult {
        let service = service_with_limits(expire_immediately());
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;

        let recreated = service.create_cart(NewCart { uuid: cart }).await?;

        assert!(recreated.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn carts_beyond_the_limit_are_refused() -> TestResult {
        let service = service_with_limits(CartLimits {
            max_carts: 2,
            ..CartLimits::default()
        });

        service.create_cart(NewCart { uuid: CartUuid::new() }).await?;
        service.create_cart(NewCart { uuid: CartUuid::new() }).await?;

        let result = service.create_cart(NewCart { uuid: CartUuid::new() }).await;

        assert!(matches!(result, Err(CartsServiceError::TooManyCarts)));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_cart_frees_room_under_the_limit() -> TestResult {
        let service = service_with_limits(CartLimits {
            max_carts: 1,
            ..CartLimits::default()
        });
        let cart = CartUuid::new();

        service.create_cart(NewCart { uuid: cart }).await?;
        service.delete_cart(cart).await?;
        service.create_cart(NewCart { uuid: CartUuid::new() }).await?;

        Ok(())
    }
}
