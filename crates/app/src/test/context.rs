//! Test context for service-level integration tests.

use testresult::TestResult;

use crate::{
    database::Db,
    domain::{
        categories::PgCategoriesService, orders::PgOrdersService, pages::PgPagesService,
        products::PgProductsService,
    },
};

use super::db::TestDb;

/// Postgres-backed services sharing one isolated test database.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub categories: PgCategoriesService,
    pub pages: PgPagesService,
    pub orders: PgOrdersService,
}

impl TestContext {
    pub(crate) async fn new() -> TestResult<Self> {
        let test_db = TestDb::new().await?;
        let db = Db::new(test_db.pool().clone());

        Ok(Self {
            products: PgProductsService::new(db.clone()),
            categories: PgCategoriesService::new(db.clone()),
            pages: PgPagesService::new(db.clone()),
            orders: PgOrdersService::new(db),
            db: test_db,
        })
    }
}
