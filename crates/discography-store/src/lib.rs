//! Discography Store — in-memory entity stores.
//!
//! All state is volatile and lives for the lifetime of the process.

pub mod memory_store;

pub use memory_store::InMemoryStore;
