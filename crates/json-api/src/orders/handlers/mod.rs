//! Order Handlers

pub(crate) mod index;
pub(crate) mod status;
