//! Entity store abstraction.

use async_trait::async_trait;

use crate::entity::Entity;
use crate::error::DomainError;

/// Keyed collection holding the live records of one entity kind.
///
/// Implementations must give readers-writer exclusion: any number of
/// concurrent `list`/`get` calls, or exactly one `put`/`delete`, never both.
/// A reader never observes a partially written record.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Returns every current entry, in no particular order, as one
    /// point-in-time snapshot.
    async fn list(&self) -> Vec<E>;

    /// Returns the entry stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no entry has that identity.
    async fn get(&self, id: E::Id) -> Result<E, DomainError>;

    /// Inserts `entity` at its own identity, replacing any prior entry.
    async fn put(&self, entity: E);

    /// Removes the entry stored under `id`. Absent ids are a no-op.
    async fn delete(&self, id: E::Id);
}
