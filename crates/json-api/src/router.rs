//! App Router

use salvo::Router;

use crate::{auth, carts, categories, healthcheck, orders, pages, products, session, storage};

/// Every route the server answers.
///
/// Storefront and cart routes are open. `session` requires a bearer token and everything under
/// `admin` additionally requires the admin role.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("products").get(products::index::handler))
        .push(Router::with_path("categories").get(categories::index::handler))
        .push(Router::with_path("pages/{slug}").get(pages::get::handler))
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{product}")
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("session")
                        .get(session::get::handler)
                        .delete(session::delete::handler),
                )
                .push(admin_router()),
        )
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(auth::admin::handler)
        .push(
            Router::with_path("products")
                .get(products::admin_index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("active").put(products::active::handler)),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{category}")
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("pages")
                .get(pages::index::handler)
                .post(pages::create::handler)
                .push(
                    Router::with_path("{page}")
                        .put(pages::update::handler)
                        .delete(pages::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}/status").put(orders::status::handler)),
        )
        .push(Router::with_path("buckets").get(storage::buckets::handler))
        .push(Router::with_path("uploads/{bucket}").post(storage::upload::handler))
}
