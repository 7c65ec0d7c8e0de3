//! Store-backed entity service.
//!
//! Forwards every call to the underlying store so that higher layers depend
//! on the `EntityService` capability instead of a concrete store.

use std::sync::Arc;

use async_trait::async_trait;
use discography_core::entity::Entity;
use discography_core::error::DomainError;
use discography_core::service::EntityService;
use discography_core::store::EntityStore;

/// `EntityService` that passes every operation straight through to a store.
pub struct StoreBackedService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
}

impl<E: Entity> StoreBackedService<E> {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn EntityStore<E>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for StoreBackedService<E> {
    async fn list_all(&self) -> Vec<E> {
        self.store.list().await
    }

    async fn get_by_id(&self, id: E::Id) -> Result<E, DomainError> {
        self.store.get(id).await
    }

    async fn create(&self, entity: E) {
        self.store.put(entity).await;
    }

    async fn delete_by_id(&self, id: E::Id) {
        self.store.delete(id).await;
    }
}
