//! In-memory implementation of the `EntityStore` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use discography_core::entity::Entity;
use discography_core::error::DomainError;
use discography_core::store::EntityStore;

/// `HashMap`-backed store guarded by a readers-writer lock.
///
/// Each instance is its own exclusion domain, so two stores never block each
/// other.
#[derive(Debug)]
pub struct InMemoryStore<E: Entity> {
    entries: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> InMemoryStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-populated with `entries`. Later entries win on
    /// duplicate identities.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = E>) -> Self {
        let map = entries.into_iter().map(|e| (e.id(), e)).collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn list(&self) -> Vec<E> {
        let entries = self.entries.read().await;
        entries.values().cloned().collect()
    }

    async fn get(&self, id: E::Id) -> Result<E, DomainError> {
        let entries = self.entries.read().await;
        entries
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found::<E>(id))
    }

    async fn put(&self, entity: E) {
        let mut entries = self.entries.write().await;
        entries.insert(entity.id(), entity);
    }

    async fn delete(&self, id: E::Id) {
        let mut entries = self.entries.write().await;
        entries.remove(&id);
    }
}
