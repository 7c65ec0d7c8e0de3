//! Test stores — mock `EntityStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use discography_core::entity::Entity;
use discography_core::error::DomainError;
use discography_core::store::EntityStore;

/// A single call observed by a `RecordingStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall<E: Entity> {
    /// `list()` was called.
    List,
    /// `get(id)` was called.
    Get(E::Id),
    /// `put(entity)` was called.
    Put(E),
    /// `delete(id)` was called.
    Delete(E::Id),
}

/// A store that serves a fixed set of entries and records every call made to
/// it. Writes are recorded but never applied, so reads keep returning the
/// configured entries.
#[derive(Debug)]
pub struct RecordingStore<E: Entity> {
    entries: Vec<E>,
    calls: Mutex<Vec<StoreCall<E>>>,
}

impl<E: Entity> RecordingStore<E> {
    /// Create a recording store that serves `entries` from `list` and `get`.
    #[must_use]
    pub fn new(entries: Vec<E>) -> Self {
        Self {
            entries,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all calls, in the order they were made.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<StoreCall<E>> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall<E>) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for RecordingStore<E> {
    async fn list(&self) -> Vec<E> {
        self.record(StoreCall::List);
        self.entries.clone()
    }

    async fn get(&self, id: E::Id) -> Result<E, DomainError> {
        self.record(StoreCall::Get(id));
        self.entries
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found::<E>(id))
    }

    async fn put(&self, entity: E) {
        self.record(StoreCall::Put(entity));
    }

    async fn delete(&self, id: E::Id) {
        self.record(StoreCall::Delete(id));
    }
}

/// A store that holds nothing: `list` is empty, every `get` is `NotFound`, and
/// writes are silently discarded. Useful for not-found paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStore;

#[async_trait]
impl<E: Entity> EntityStore<E> for EmptyStore {
    async fn list(&self) -> Vec<E> {
        Vec::new()
    }

    async fn get(&self, id: E::Id) -> Result<E, DomainError> {
        Err(DomainError::not_found::<E>(id))
    }

    async fn put(&self, _entity: E) {}

    async fn delete(&self, _id: E::Id) {}
}
