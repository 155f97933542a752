//! Storefront domain services.

pub mod carts;
pub mod categories;
pub mod orders;
pub mod pages;
pub mod products;
