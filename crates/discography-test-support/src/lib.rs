//! Shared test doubles and utilities for the Discography resource server.

mod store;

pub use store::{EmptyStore, RecordingStore, StoreCall};
