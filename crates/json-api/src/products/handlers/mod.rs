//! Product Handlers

pub(crate) mod active;
pub(crate) mod admin_index;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod update;
