//! Route modules organized by resource.

pub mod health;
pub mod performers;
pub mod releases;
