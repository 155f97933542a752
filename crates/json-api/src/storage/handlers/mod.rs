//! Storage Handlers

pub(crate) mod buckets;
pub(crate) mod upload;
