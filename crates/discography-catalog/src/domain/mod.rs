//! Domain layer for the catalog.

pub mod fixtures;
pub mod models;
