//! Shared application domain, persistence and integration modules for the storefront.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod slugs;
pub mod storage;
pub mod uuids;

#[cfg(test)]
mod test;
