//! Application layer for the catalog.

pub mod composition;
pub mod entity_service;
