//! Entity service abstraction.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainError;

/// Capability interface over one entity kind, consumed by the HTTP layer and
/// by the release composition.
///
/// Contracts are exactly those of [`EntityStore`](crate::store::EntityStore).
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// Returns every current entity.
    async fn list_all(&self) -> Vec<E>;

    /// Returns the entity with the given identity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entity has that identity.
    async fn get_by_id(&self, id: E::Id) -> Result<E, DomainError>;

    /// Stores `entity`, overwriting any entity with the same identity.
    async fn create(&self, entity: E);

    /// Deletes the entity with the given identity, if present.
    async fn delete_by_id(&self, id: E::Id);
}
