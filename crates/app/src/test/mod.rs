//! Postgres-backed test harness for service tests.

mod context;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
