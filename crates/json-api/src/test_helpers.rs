//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rusty_money::iso;
use salvo::{affix_state::inject, prelude::*};
use smallvec::smallvec;

use storefront_app::{
    auth::{Identity, MockAuthService, Role, SessionUuid, UserUuid},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartRecord, CartUuid},
        },
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderItemRecord, OrderItemUuid, OrderRecord, OrderUuid},
            status::OrderStatus,
        },
        pages::{
            MockPagesService,
            records::{PageRecord, PageUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
    storage::MockStorageService,
};

use crate::state::State;

/// Service doubles for a test app context. A fresh mock panics on any call it was not told to
/// expect, so leaving a field at its default asserts that the service is never touched.
#[derive(Default)]
pub(crate) struct TestServices {
    pub(crate) products: MockProductsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) pages: MockPagesService,
    pub(crate) orders: MockOrdersService,
    pub(crate) carts: MockCartsService,
    pub(crate) auth: MockAuthService,
    pub(crate) storage: MockStorageService,
}

impl TestServices {
    pub(crate) fn into_context(self) -> AppContext {
        AppContext {
            products: Arc::new(self.products),
            categories: Arc::new(self.categories),
            pages: Arc::new(self.pages),
            orders: Arc::new(self.orders),
            carts: Arc::new(self.carts),
            auth: Arc::new(self.auth),
            storage: Arc::new(self.storage),
            currency: iso::USD,
        }
    }

    /// Serve `route` to an anonymous caller.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(self.into_context())))
                .push(route),
        )
    }

    /// Serve `route` as if the auth middleware had already resolved `identity`.
    pub(crate) fn service_as(self, identity: Identity, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(self.into_context())))
                .hoop(inject(identity))
                .push(route),
        )
    }
}

fn identity(role: Role, email: &str) -> Identity {
    Identity {
        user_uuid: UserUuid::new(),
        email: email.to_string(),
        full_name: None,
        role,
        session_uuid: SessionUuid::new(),
    }
}

pub(crate) fn admin_identity() -> Identity {
    identity(Role::Admin, "admin@example.com")
}

pub(crate) fn customer_identity() -> Identity {
    identity(Role::Customer, "shopper@example.com")
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Logo Tee".to_string(),
        slug: "logo-tee".to_string(),
        description: None,
        price: 25_00,
        sale_price: None,
        category_uuid: None,
        category_name: None,
        image_url: None,
        stock_quantity: 10,
        product_type: "men".to_string(),
        is_new: false,
        is_sale: false,
        is_active: true,
        sizes: smallvec!["S".to_string(), "M".to_string()],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: "Outerwear".to_string(),
        slug: "outerwear".to_string(),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_page(uuid: PageUuid) -> PageRecord {
    PageRecord {
        uuid,
        slug: "about".to_string(),
        title: "About".to_string(),
        content: "Hello".to_string(),
        is_published: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid) -> OrderRecord {
    OrderRecord {
        uuid,
        user_uuid: None,
        total_amount: 50_00,
        status: OrderStatus::Pending,
        shipping_address: serde_json::json!({ "city": "Leeds" }),
        created_at: Timestamp::UNIX_EPOCH,
        items: vec![OrderItemRecord {
            uuid: OrderItemUuid::new(),
            product_uuid: ProductUuid::new(),
            product_name: "Logo Tee".to_string(),
            quantity: 2,
            size: Some("M".to_string()),
            price: 25_00,
        }],
    }
}

pub(crate) fn make_cart(uuid: CartUuid) -> CartRecord {
    CartRecord {
        uuid,
        currency: iso::USD,
        items: Vec::new(),
        item_count: 0,
        total: 0,
    }
}

pub(crate) fn make_cart_with(uuid: CartUuid, product: ProductUuid, quantity: u32) -> CartRecord {
    let line_total = 25_00 * u64::from(quantity);

    CartRecord {
        uuid,
        currency: iso::USD,
        items: vec![CartItemRecord {
            product_uuid: product,
            name: "Logo Tee".to_string(),
            unit_price: 25_00,
            quantity,
            line_total,
        }],
        item_count: u64::from(quantity),
        total: line_total,
    }
}
